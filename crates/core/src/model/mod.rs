mod assessment;
mod ids;
mod lesson;
mod session;

pub use assessment::{Assessment, AssessmentStep, QUESTION_TIME_LIMIT_SECS, Question};
pub use ids::{CourseId, Level, TopicId};
pub use lesson::{ChatMessage, ChatRole, KnowledgeCheck, LessonProgress, TutorTranscript};
pub use session::{AuthToken, Session, SessionState, SessionStatus, UserIdentity};
