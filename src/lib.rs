pub mod app;
pub mod bank;
pub mod config;
pub mod error;
pub mod input;
pub mod logger;
pub mod models;
pub mod report;
pub mod session;
pub mod snapshot;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use app::App;
pub use bank::{QuestionBank, QUESTION_BANK};
pub use config::QuizConfig;
pub use error::QuizError;
pub use input::handle_key;
pub use models::{AnswerRecord, AppState, Question, Resolution};
pub use report::write_report;
pub use session::{QuizSession, TIME_LIMIT_SECONDS};
pub use snapshot::{Results, ReviewEntry, Snapshot};
pub use ui::{draw_app, draw_quit_confirmation, draw_quiz, draw_summary};
pub use utils::{format_duration, truncate_string};
