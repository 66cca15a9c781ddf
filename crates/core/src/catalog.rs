//! Static course content compiled into the app.
//!
//! Courses, difficulty paths, placement questions, dashboard topics and the
//! shared lesson outline. Nothing here is fetched or persisted.

use crate::error::CatalogError;
use crate::model::{CourseId, Level, Question};

#[derive(Debug, PartialEq, Eq)]
pub struct Course {
    pub id: CourseId,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, PartialEq, Eq)]
pub struct LearningPath {
    pub level: Level,
    pub description: &'static str,
    pub duration: &'static str,
    pub lesson_count: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub struct KnowledgeCheckQuestion {
    pub prompt: &'static str,
    pub options: &'static [&'static str],
}

#[derive(Debug, PartialEq, Eq)]
pub struct Topic {
    pub id: &'static str,
    pub course: CourseId,
    pub title: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
    pub progress_percent: u8,
    pub duration: &'static str,
    pub check: KnowledgeCheckQuestion,
}

#[derive(Debug, PartialEq, Eq)]
pub struct LessonStep {
    pub number: u8,
    pub title: &'static str,
    pub description: &'static str,
    pub completed: bool,
}

#[derive(Debug, PartialEq, Eq)]
pub struct Resource {
    pub title: &'static str,
    pub url: &'static str,
}

/// Everything the lesson page shows for one topic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lesson {
    pub topic: &'static Topic,
    pub course: &'static Course,
    pub overview_markdown: String,
    pub objectives: &'static [&'static str],
    pub steps: &'static [LessonStep],
    pub resources: &'static [Resource],
    pub knowledge_check: &'static KnowledgeCheckQuestion,
    pub tutor_greeting: String,
}

static COURSES: [Course; 4] = [
    Course {
        id: CourseId::WebDev,
        title: "Web Development",
        description: "Build modern experiences with HTML, CSS, JavaScript, and React.",
    },
    Course {
        id: CourseId::DataScience,
        title: "Data Science",
        description: "Master analytics, visualization, and machine learning fundamentals.",
    },
    Course {
        id: CourseId::Ai,
        title: "Artificial Intelligence",
        description: "Explore neural networks, deep learning, and AI applications.",
    },
    Course {
        id: CourseId::UiUx,
        title: "UI/UX Design",
        description: "Create beautiful, user-centered digital experiences.",
    },
];

static PATHS: [LearningPath; 3] = [
    LearningPath {
        level: Level::Beginner,
        description: "Start from scratch with foundational concepts and guided exercises.",
        duration: "8-12 weeks",
        lesson_count: 24,
    },
    LearningPath {
        level: Level::Intermediate,
        description: "Build on basics with real-world projects and advanced techniques.",
        duration: "12-16 weeks",
        lesson_count: 36,
    },
    LearningPath {
        level: Level::Advanced,
        description: "Master complex patterns, optimization, and industry best practices.",
        duration: "16-20 weeks",
        lesson_count: 48,
    },
];

static WEB_DEV_QUESTIONS: [Question; 3] = [
    Question {
        prompt: "What does HTML stand for?",
        options: &[
            "Hyper Text Markup Language",
            "High Tech Modern Language",
            "Home Tool Markup Language",
            "Hyperlinks and Text Markup Language",
        ],
    },
    Question {
        prompt: "Which CSS property controls text size?",
        options: &["text-size", "font-size", "text-style", "font-style"],
    },
    Question {
        prompt: "What is the correct syntax for a JavaScript function?",
        options: &[
            "function myFunction()",
            "def myFunction()",
            "func myFunction()",
            "function:myFunction()",
        ],
    },
];

static DATA_SCIENCE_QUESTIONS: [Question; 3] = [
    Question {
        prompt: "Which measure is least affected by outliers?",
        options: &["Mean", "Median", "Range", "Variance"],
    },
    Question {
        prompt: "What kind of chart best shows the distribution of one variable?",
        options: &["Histogram", "Pie chart", "Line chart", "Radar chart"],
    },
    Question {
        prompt: "Splitting data into train and test sets helps detect what?",
        options: &["Overfitting", "Missing values", "Duplicates", "Encoding errors"],
    },
];

static AI_QUESTIONS: [Question; 3] = [
    Question {
        prompt: "What does a neural network adjust during training?",
        options: &["Weights", "Input data", "Labels", "Hardware"],
    },
    Question {
        prompt: "Which activation function outputs values between 0 and 1?",
        options: &["ReLU", "Sigmoid", "Identity", "Step with -1"],
    },
    Question {
        prompt: "What is the purpose of a loss function?",
        options: &[
            "Measure prediction error",
            "Store the dataset",
            "Speed up inference",
            "Visualize layers",
        ],
    },
];

static UI_UX_QUESTIONS: [Question; 3] = [
    Question {
        prompt: "What is a wireframe?",
        options: &[
            "A low-fidelity layout sketch",
            "A finished visual design",
            "A backend schema",
            "A usability report",
        ],
    },
    Question {
        prompt: "Which principle groups related items close together?",
        options: &["Proximity", "Contrast", "Repetition", "Alignment"],
    },
    Question {
        prompt: "What does a usability test primarily observe?",
        options: &[
            "Real users attempting tasks",
            "Server response times",
            "Brand guidelines",
            "Code quality",
        ],
    },
];

static WEB_DEV_TOPICS: [Topic; 4] = [
    Topic {
        id: "html-basics",
        course: CourseId::WebDev,
        title: "Introduction to HTML",
        tagline: "Structure the web with semantic building blocks.",
        summary: "Learn the building blocks of web pages with semantic HTML elements.",
        progress_percent: 75,
        duration: "2 hours",
        check: KnowledgeCheckQuestion {
            prompt: "Which tag creates a link?",
            options: &["<a>", "<link>", "<href>", "<url>"],
        },
    },
    Topic {
        id: "css-basics",
        course: CourseId::WebDev,
        title: "CSS Fundamentals",
        tagline: "Give structure a style with selectors and layout.",
        summary: "Style your web pages with modern CSS techniques and layouts.",
        progress_percent: 45,
        duration: "3 hours",
        check: KnowledgeCheckQuestion {
            prompt: "Which property creates a flex container?",
            options: &["display: flex", "flex: 1", "position: flex", "float: flex"],
        },
    },
    Topic {
        id: "js-core",
        course: CourseId::WebDev,
        title: "JavaScript Core",
        tagline: "Make pages respond with variables, functions, and control flow.",
        summary: "Master variables, functions, and control flow in JavaScript.",
        progress_percent: 20,
        duration: "4 hours",
        check: KnowledgeCheckQuestion {
            prompt: "Which keyword declares a block-scoped constant?",
            options: &["const", "var", "let", "static"],
        },
    },
    Topic {
        id: "react-intro",
        course: CourseId::WebDev,
        title: "React Foundations",
        tagline: "Compose interfaces from components and state.",
        summary: "Build interactive UIs with components, props, and state management.",
        progress_percent: 0,
        duration: "5 hours",
        check: KnowledgeCheckQuestion {
            prompt: "How does a parent pass data to a child component?",
            options: &["Props", "Refs", "Context only", "Global variables"],
        },
    },
];

static DATA_SCIENCE_TOPICS: [Topic; 4] = [
    Topic {
        id: "python-data",
        course: CourseId::DataScience,
        title: "Python for Data",
        tagline: "Load, clean, and reshape data with Python.",
        summary: "Work with tabular data using Python's core data tools.",
        progress_percent: 60,
        duration: "3 hours",
        check: KnowledgeCheckQuestion {
            prompt: "Which structure holds labelled columns of data?",
            options: &["DataFrame", "Tuple", "Set", "Generator"],
        },
    },
    Topic {
        id: "stats-basics",
        course: CourseId::DataScience,
        title: "Statistics Essentials",
        tagline: "Describe data before you model it.",
        summary: "Summarize data with central tendency, spread, and probability.",
        progress_percent: 30,
        duration: "4 hours",
        check: KnowledgeCheckQuestion {
            prompt: "Which statistic describes spread?",
            options: &["Standard deviation", "Mode", "Median", "Sample size"],
        },
    },
    Topic {
        id: "data-viz",
        course: CourseId::DataScience,
        title: "Data Visualization",
        tagline: "Turn numbers into pictures people understand.",
        summary: "Choose and build charts that communicate clearly.",
        progress_percent: 10,
        duration: "3 hours",
        check: KnowledgeCheckQuestion {
            prompt: "Which chart compares values across categories?",
            options: &["Bar chart", "Scatter plot", "Histogram", "Heatmap"],
        },
    },
    Topic {
        id: "ml-intro",
        course: CourseId::DataScience,
        title: "Machine Learning Basics",
        tagline: "Fit your first predictive models.",
        summary: "Train, evaluate, and compare simple supervised models.",
        progress_percent: 0,
        duration: "5 hours",
        check: KnowledgeCheckQuestion {
            prompt: "Predicting a number is which kind of task?",
            options: &["Regression", "Classification", "Clustering", "Ranking"],
        },
    },
];

static AI_TOPICS: [Topic; 4] = [
    Topic {
        id: "ai-foundations",
        course: CourseId::Ai,
        title: "AI Foundations",
        tagline: "What intelligent systems can and cannot do.",
        summary: "Survey search, reasoning, and learning approaches to AI.",
        progress_percent: 50,
        duration: "2 hours",
        check: KnowledgeCheckQuestion {
            prompt: "Learning from labelled examples is called?",
            options: &["Supervised learning", "Unsupervised learning", "Search", "Planning"],
        },
    },
    Topic {
        id: "neural-nets",
        course: CourseId::Ai,
        title: "Neural Networks",
        tagline: "Layers of simple units that learn together.",
        summary: "Understand neurons, layers, activations, and backpropagation.",
        progress_percent: 25,
        duration: "4 hours",
        check: KnowledgeCheckQuestion {
            prompt: "Which algorithm computes gradients through layers?",
            options: &["Backpropagation", "Dijkstra", "K-means", "Quicksort"],
        },
    },
    Topic {
        id: "deep-learning",
        course: CourseId::Ai,
        title: "Deep Learning in Practice",
        tagline: "Train deeper models without losing your way.",
        summary: "Apply convolutional and sequence models to real problems.",
        progress_percent: 0,
        duration: "6 hours",
        check: KnowledgeCheckQuestion {
            prompt: "Which layer type is typical for images?",
            options: &["Convolutional", "Recurrent", "Embedding", "Pooling only"],
        },
    },
    Topic {
        id: "ai-applications",
        course: CourseId::Ai,
        title: "AI Applications",
        tagline: "From prototypes to responsible products.",
        summary: "Ship AI features responsibly, from evaluation to monitoring.",
        progress_percent: 0,
        duration: "3 hours",
        check: KnowledgeCheckQuestion {
            prompt: "What should be checked before deploying a model?",
            options: &["Bias and accuracy", "Font choice", "Logo colors", "Nothing"],
        },
    },
];

static UI_UX_TOPICS: [Topic; 4] = [
    Topic {
        id: "design-principles",
        course: CourseId::UiUx,
        title: "Design Principles",
        tagline: "Hierarchy, contrast, and rhythm on every screen.",
        summary: "Apply visual hierarchy, spacing, and typography with intent.",
        progress_percent: 70,
        duration: "2 hours",
        check: KnowledgeCheckQuestion {
            prompt: "What guides the eye to the most important element?",
            options: &["Visual hierarchy", "Random placement", "Equal sizing", "Lorem ipsum"],
        },
    },
    Topic {
        id: "user-research",
        course: CourseId::UiUx,
        title: "User Research",
        tagline: "Learn what people need before drawing anything.",
        summary: "Plan interviews and surveys, then synthesize findings.",
        progress_percent: 40,
        duration: "3 hours",
        check: KnowledgeCheckQuestion {
            prompt: "Which artifact summarizes a target user?",
            options: &["Persona", "Sitemap", "Style guide", "Changelog"],
        },
    },
    Topic {
        id: "wireframing",
        course: CourseId::UiUx,
        title: "Wireframing",
        tagline: "Sketch structure quickly and cheaply.",
        summary: "Lay out screens at low fidelity to test structure early.",
        progress_percent: 15,
        duration: "3 hours",
        check: KnowledgeCheckQuestion {
            prompt: "Wireframes focus mainly on?",
            options: &["Layout and structure", "Final colors", "Animations", "Copywriting"],
        },
    },
    Topic {
        id: "prototyping",
        course: CourseId::UiUx,
        title: "Interactive Prototyping",
        tagline: "Click through an idea before building it.",
        summary: "Build clickable prototypes and run quick usability tests.",
        progress_percent: 0,
        duration: "4 hours",
        check: KnowledgeCheckQuestion {
            prompt: "Why test a prototype with users?",
            options: &["Find problems early", "Skip development", "Replace research", "Pick fonts"],
        },
    },
];

static LESSON_OBJECTIVES: [&str; 3] = [
    "Understand the problem domain and vocabulary",
    "Apply concepts with guided exercises",
    "Evaluate solutions and reflect on improvements",
];

static LESSON_STEPS: [LessonStep; 4] = [
    LessonStep {
        number: 1,
        title: "Intro",
        description: "Get a quick overview and context.",
        completed: true,
    },
    LessonStep {
        number: 2,
        title: "Concepts",
        description: "Learn core ideas with small demos.",
        completed: true,
    },
    LessonStep {
        number: 3,
        title: "Hands-on",
        description: "Build a mini project to apply the concept.",
        completed: false,
    },
    LessonStep {
        number: 4,
        title: "Review",
        description: "Summarize, quiz yourself, and set next actions.",
        completed: false,
    },
];

static RESOURCES: [Resource; 4] = [
    Resource {
        title: "MDN Guide",
        url: "https://developer.mozilla.org/",
    },
    Resource {
        title: "WebAIM Checklist",
        url: "https://webaim.org/standards/wcag/checklist",
    },
    Resource {
        title: "Awesome Repo",
        url: "https://github.com/sindresorhus/awesome",
    },
    Resource {
        title: "Practice Challenges",
        url: "https://www.frontendmentor.io/challenges",
    },
];

#[must_use]
pub fn courses() -> &'static [Course] {
    &COURSES
}

#[must_use]
pub fn course(id: CourseId) -> &'static Course {
    match id {
        CourseId::WebDev => &COURSES[0],
        CourseId::DataScience => &COURSES[1],
        CourseId::Ai => &COURSES[2],
        CourseId::UiUx => &COURSES[3],
    }
}

#[must_use]
pub fn learning_paths() -> &'static [LearningPath] {
    &PATHS
}

#[must_use]
pub fn questions(course: CourseId) -> &'static [Question] {
    match course {
        CourseId::WebDev => &WEB_DEV_QUESTIONS,
        CourseId::DataScience => &DATA_SCIENCE_QUESTIONS,
        CourseId::Ai => &AI_QUESTIONS,
        CourseId::UiUx => &UI_UX_QUESTIONS,
    }
}

#[must_use]
pub fn topics(course: CourseId) -> &'static [Topic] {
    match course {
        CourseId::WebDev => &WEB_DEV_TOPICS,
        CourseId::DataScience => &DATA_SCIENCE_TOPICS,
        CourseId::Ai => &AI_TOPICS,
        CourseId::UiUx => &UI_UX_TOPICS,
    }
}

#[must_use]
pub fn find_topic(id: &str) -> Option<&'static Topic> {
    CourseId::ALL
        .into_iter()
        .flat_map(topics)
        .find(|topic| topic.id == id)
}

/// # Errors
///
/// Returns `CatalogError::UnknownTopic` when no course has a topic with this id.
pub fn lesson(topic_id: &str) -> Result<Lesson, CatalogError> {
    let topic =
        find_topic(topic_id).ok_or_else(|| CatalogError::UnknownTopic(topic_id.to_string()))?;
    let course = course(topic.course);
    let overview_markdown = format!(
        "This lesson introduces **{}** with a short video, concise notes, and practice \
         tasks.\n\n{}\n\nUse the progress timeline to jump between stages.",
        topic.title, topic.summary
    );
    let tutor_greeting = format!(
        "Hi! I am here to help you understand {}. What would you like to know?",
        topic.title
    );

    Ok(Lesson {
        topic,
        course,
        overview_markdown,
        objectives: &LESSON_OBJECTIVES,
        steps: &LESSON_STEPS,
        resources: &RESOURCES,
        knowledge_check: &topic.check,
        tutor_greeting,
    })
}
