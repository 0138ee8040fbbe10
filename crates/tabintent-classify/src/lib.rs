//! Local intent suggestion: page signals in, ranked label and note out

mod classifier;
pub mod lexicon;
mod notes;
mod tokenize;

pub use classifier::{classify, Classifier, LabelBreakdown, LabelScores, MAX_CONFIDENCE, MIN_CONFIDENCE};
pub use lexicon::DomainRule;
pub use notes::{extract_keywords, note_prefix, synthesize_note, NOTE_KEYWORDS, NOTE_MAX_CHARS};
pub use tokenize::{is_stop_word, significant_tokens, tokenize};
