mod builder;
mod collection;
mod group;
mod question;
mod score;

pub use builder::{QuestionBuilder, QuestionGroupBuilder, ValidationError};
pub use collection::QuestionGroupCollection;
pub use group::QuestionGroup;
pub use question::Question;
pub use score::{AnswerOutcome, Score};
