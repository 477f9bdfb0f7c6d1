//! Fixed-capacity storage for the candidate analyses of a single word.
//!
//! A morphological analyzer produces zero or more candidate analyses for each
//! word it sees. Every candidate carries a normal (dictionary) form and two
//! grammar class codes: one for the normal form and one for the analyzed
//! surface form. The analyzer knows up front how many candidates it can ever
//! produce for one word, so the buffer is sized once and never grows.
//!
//! # Architecture
//!
//! - [`word_infos`] -- The [`WordInfos`] buffer and its [`WordInfo`] entries
//! - [`error`] -- Index, allocation and saturation errors
//!
//! # Example
//!
//! ```
//! use wordinfos_core::WordInfos;
//!
//! let mut infos: WordInfos = WordInfos::new(2);
//! infos.prepend_word("run".to_string(), 1, 5).unwrap();
//! infos.prepend_word_with_prediction("ran".to_string(), 1, 6, true).unwrap();
//!
//! assert_eq!(infos.normal_form(0).unwrap(), "ran");
//! assert_eq!(infos.normal_form(1).unwrap(), "run");
//! assert!(infos.is_prediction());
//!
//! let rejected = infos.prepend_word("running".to_string(), 1, 7).unwrap_err();
//! assert_eq!(rejected.into_form(), "running");
//! assert!(infos.has_overflowed());
//! assert_eq!(infos.len(), 2);
//! ```

pub mod error;
pub mod word_infos;

pub use error::{PrependError, WordInfosError};
pub use word_infos::{WordInfo, WordInfos};

/// Grammar class code attached to a form.
///
/// The buffer stores these codes verbatim; their meaning (part of speech,
/// inflection pattern, ...) is defined by the analyzer's grammar tables.
pub type GrammarId = u16;
