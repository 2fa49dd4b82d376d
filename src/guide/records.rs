use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Get the current date in local timezone
pub fn local_date_today() -> NaiveDate {
    Local::now().date_naive()
}

/// General education category a class counts toward
///
/// The registrar's category codes are used verbatim as both the variant
/// names and the TOML serialization format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenEd {
    /// Humanities, Arts and Design
    HUAD,
    /// Social and Behavioral Sciences
    SOBE,
    /// Scientific Thinking in Natural Sciences
    SCIT,
    /// Quantitative Reasoning
    QTRS,
    /// Mathematics
    MATH,
    /// American Institutions
    AMIT,
    /// Governance and Civic Engagement
    CIVI,
    /// Global Communities, Societies and Individuals
    GCSI,
    /// Sustainability
    SUST,
}

impl FromStr for GenEd {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "HUAD" => Ok(GenEd::HUAD),
            "SOBE" => Ok(GenEd::SOBE),
            "SCIT" => Ok(GenEd::SCIT),
            "QTRS" => Ok(GenEd::QTRS),
            "MATH" => Ok(GenEd::MATH),
            "AMIT" => Ok(GenEd::AMIT),
            "CIVI" => Ok(GenEd::CIVI),
            "GCSI" => Ok(GenEd::GCSI),
            "SUST" => Ok(GenEd::SUST),
            _ => Err(format!(
                "Invalid gen ed category '{}'. Valid options are: HUAD, SOBE, SCIT, QTRS, MATH, AMIT, CIVI, GCSI, SUST",
                s
            )),
        }
    }
}

/// Course workload rating
///
/// Uses snake_case naming to match TOML serialization format. The aliases
/// accept the labels older data files used for the same three ratings.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    /// Light reading, generous grading
    #[serde(alias = "Light Workload", alias = "Easy A")]
    light_workload,
    /// Typical effort for the credit hours
    #[serde(alias = "Standard Pace", alias = "Moderate")]
    standard_pace,
    /// Heavy reading or problem sets every week
    #[serde(alias = "Content Heavy", alias = "Hard")]
    content_heavy,
}

impl Difficulty {
    /// Human-readable label as shown in directory listings
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::light_workload => "Light Workload",
            Difficulty::standard_pace => "Standard Pace",
            Difficulty::content_heavy => "Content Heavy",
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light_workload" => Ok(Difficulty::light_workload),
            "standard_pace" => Ok(Difficulty::standard_pace),
            "content_heavy" => Ok(Difficulty::content_heavy),
            _ => Err(format!(
                "Invalid difficulty '{}'. Valid options are: light_workload, standard_pace, content_heavy",
                s
            )),
        }
    }
}

/// Whether showing up is graded
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Attendance {
    mandatory,
    optional,
    unknown,
}

impl Default for Attendance {
    fn default() -> Self {
        Attendance::unknown
    }
}

impl Attendance {
    pub fn label(&self) -> &'static str {
        match self {
            Attendance::mandatory => "Mandatory",
            Attendance::optional => "Optional",
            Attendance::unknown => "Unknown",
        }
    }
}

impl FromStr for Attendance {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mandatory" => Ok(Attendance::mandatory),
            "optional" => Ok(Attendance::optional),
            "unknown" => Ok(Attendance::unknown),
            _ => Err(format!(
                "Invalid attendance '{}'. Valid options are: mandatory, optional, unknown",
                s
            )),
        }
    }
}

/// How exams are administered
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExamFormat {
    in_person,
    online,
    none,
    unknown,
}

impl Default for ExamFormat {
    fn default() -> Self {
        ExamFormat::unknown
    }
}

impl ExamFormat {
    pub fn label(&self) -> &'static str {
        match self {
            ExamFormat::in_person => "In-Person",
            ExamFormat::online => "Online",
            ExamFormat::none => "None",
            ExamFormat::unknown => "Unknown",
        }
    }
}

impl FromStr for ExamFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in_person" => Ok(ExamFormat::in_person),
            "online" => Ok(ExamFormat::online),
            "none" => Ok(ExamFormat::none),
            "unknown" => Ok(ExamFormat::unknown),
            _ => Err(format!(
                "Invalid exam format '{}'. Valid options are: in_person, online, none, unknown",
                s
            )),
        }
    }
}

/// A class entry in the directory
///
/// Keyed by course code, which is stored trimmed and uppercased so that
/// "cse 110" and "CSE 110" refer to the same entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Class {
    /// Course code, the unique key (e.g., "CSE 110")
    pub code: String,
    /// Course title (e.g., "Principles of Programming")
    pub name: String,
    /// Professor teaching the section this entry describes
    pub professor: String,
    /// Short student-written description of what to expect
    pub description: String,
    /// Gen ed category the class counts toward
    pub gen_ed: GenEd,
    /// Workload rating
    pub difficulty: Difficulty,
    /// Attendance policy
    #[serde(default)]
    pub attendance: Attendance,
    /// Exam format
    #[serde(default)]
    pub exams: ExamFormat,
    /// Optional RateMyProfessors link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rmp_link: Option<String>,
    /// Date when the entry was created
    #[serde(default = "local_date_today")]
    pub created_at: NaiveDate,
    /// Date when the entry was last updated
    #[serde(default = "local_date_today")]
    pub updated_at: NaiveDate,
}

/// Kind of place in the directory
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaceCategory {
    food,
    study,
    cafe,
}

impl PlaceCategory {
    pub fn label(&self) -> &'static str {
        match self {
            PlaceCategory::food => "Food",
            PlaceCategory::study => "Study",
            PlaceCategory::cafe => "Cafe",
        }
    }
}

impl FromStr for PlaceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "food" => Ok(PlaceCategory::food),
            "study" => Ok(PlaceCategory::study),
            "cafe" => Ok(PlaceCategory::cafe),
            _ => Err(format!(
                "Invalid category '{}'. Valid options are: food, study, cafe",
                s
            )),
        }
    }
}

/// Perks a place offers, all off by default
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceFlags {
    /// Accepts meal plan / M&G dollars
    pub accepts_mng: bool,
    /// Open late (after 10pm)
    pub is_late_night: bool,
    /// Cheap for a student budget
    pub is_budget: bool,
}

/// A food, study, or cafe spot in the directory
///
/// Keyed by name, stored trimmed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Place {
    /// Place name, the unique key (e.g., "Hayden Library")
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<PlaceCategory>,
    /// Where to find it (e.g., "Memorial Union, lower level")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub flags: PlaceFlags,
    /// Current student deals, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deals: Option<String>,
    #[serde(default = "local_date_today")]
    pub created_at: NaiveDate,
    #[serde(default = "local_date_today")]
    pub updated_at: NaiveDate,
}

/// What a suggestion proposes to add
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionKind {
    class,
    food,
    other,
}

impl SuggestionKind {
    pub fn label(&self) -> &'static str {
        match self {
            SuggestionKind::class => "Class",
            SuggestionKind::food => "Food",
            SuggestionKind::other => "Other",
        }
    }
}

impl FromStr for SuggestionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "class" => Ok(SuggestionKind::class),
            "food" => Ok(SuggestionKind::food),
            "other" => Ok(SuggestionKind::other),
            _ => Err(format!(
                "Invalid suggestion kind '{}'. Valid options are: class, food, other",
                s
            )),
        }
    }
}

/// Review state of a suggestion
///
/// Suggestions are created pending. The approved and rejected states exist
/// in stored data but no tool currently transitions into them.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuggestionStatus {
    pending,
    approved,
    rejected,
}

impl Default for SuggestionStatus {
    fn default() -> Self {
        SuggestionStatus::pending
    }
}

impl SuggestionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SuggestionStatus::pending => "Pending",
            SuggestionStatus::approved => "Approved",
            SuggestionStatus::rejected => "Rejected",
        }
    }
}

fn default_username() -> String {
    "Anonymous".to_string()
}

/// A community suggestion for the guide
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Suggestion {
    /// Generated identifier (e.g., "suggestion-7")
    pub id: String,
    /// What the submitter wants added or changed
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<SuggestionKind>,
    /// Submitter's display name
    #[serde(default = "default_username")]
    pub username: String,
    #[serde(default)]
    pub status: SuggestionStatus,
    /// Course code, for class suggestions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_code: Option<String>,
    /// Professor, for class suggestions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub professor: Option<String>,
    /// Why this belongs in the guide
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default = "local_date_today")]
    pub created_at: NaiveDate,
}

impl Suggestion {
    pub fn is_pending(&self) -> bool {
        self.status == SuggestionStatus::pending
    }
}
