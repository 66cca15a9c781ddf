use planner_core::catalog;
use planner_core::model::{CourseId, Level, TopicId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CourseCardVm {
    pub id: CourseId,
    pub title: &'static str,
    pub description: &'static str,
}

#[must_use]
pub fn course_cards() -> Vec<CourseCardVm> {
    catalog::courses()
        .iter()
        .map(|course| CourseCardVm {
            id: course.id,
            title: course.title,
            description: course.description,
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathCardVm {
    pub level: Level,
    pub title: &'static str,
    pub description: &'static str,
    pub duration: &'static str,
    pub lessons_label: String,
}

#[must_use]
pub fn path_cards() -> Vec<PathCardVm> {
    catalog::learning_paths()
        .iter()
        .map(|path| PathCardVm {
            level: path.level,
            title: path.level.title(),
            description: path.description,
            duration: path.duration,
            lessons_label: format!("{} lessons", path.lesson_count),
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicCardVm {
    pub id: TopicId,
    pub title: &'static str,
    pub summary: &'static str,
    pub duration: &'static str,
    pub progress_percent: u8,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardVm {
    pub course_title: &'static str,
    pub level_label: String,
    pub overall_percent: u8,
    pub topics: Vec<TopicCardVm>,
}

#[must_use]
pub fn dashboard(course_id: CourseId, level: Level) -> DashboardVm {
    let topics: Vec<TopicCardVm> = catalog::topics(course_id)
        .iter()
        .map(|topic| TopicCardVm {
            id: TopicId::new(topic.id),
            title: topic.title,
            summary: topic.summary,
            duration: topic.duration,
            progress_percent: topic.progress_percent,
        })
        .collect();

    DashboardVm {
        course_title: catalog::course(course_id).title,
        level_label: format!("{} Path", level.title()),
        overall_percent: average_progress(&topics),
        topics,
    }
}

fn average_progress(topics: &[TopicCardVm]) -> u8 {
    if topics.is_empty() {
        return 0;
    }
    let total: usize = topics
        .iter()
        .map(|topic| usize::from(topic.progress_percent))
        .sum();
    u8::try_from(total / topics.len()).unwrap_or(100)
}
