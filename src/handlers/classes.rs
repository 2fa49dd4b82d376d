//! Class directory handlers for the guide server

use crate::GuideServerHandler;
use crate::formatting;
use crate::guide::{self, Attendance, Class, ClassFilters, ExamFormat, local_date_today};
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl GuideServerHandler {
    /// Handles class directory lookups - applies filters and formats
    /// results for display.
    pub async fn handle_classes(
        &self,
        search: Option<String>,
        difficulty: Option<String>,
        gen_ed: Option<String>,
    ) -> McpResult<String> {
        // Parse and validate enum filters before touching the data
        let difficulty_filter = if let Some(ref difficulty_str) = difficulty {
            Some(validation::parse_difficulty(difficulty_str)?)
        } else {
            None
        };

        let gen_ed_filter = if let Some(ref gen_ed_str) = gen_ed {
            Some(validation::parse_gen_ed(gen_ed_str)?)
        } else {
            None
        };

        let filters = ClassFilters {
            search,
            difficulty: difficulty_filter,
            gen_ed: gen_ed_filter,
        };

        let data = self.data.lock().unwrap();
        let directory_empty = data.classes.is_empty();
        let mut classes = data.classes.clone();
        drop(data);

        guide::apply_class_filters(&mut classes, &filters);

        Ok(formatting::format_classes(classes, directory_empty))
    }

    /// Adds a class to the directory (access-gated).
    #[allow(clippy::too_many_arguments)]
    pub async fn handle_add_class(
        &self,
        access_code: String,
        code: String,
        name: String,
        professor: String,
        description: String,
        gen_ed: String,
        difficulty: String,
        attendance: Option<String>,
        exams: Option<String>,
        rmp_link: Option<String>,
    ) -> McpResult<String> {
        self.check_access(&access_code)?;

        let code = validation::normalize_course_code(&code);
        if code.is_empty() {
            bail_public!(_, "Class code is required");
        }
        let name = name.trim().to_string();
        if name.is_empty() {
            bail_public!(_, "Class name is required");
        }
        let professor = professor.trim().to_string();
        if professor.is_empty() {
            bail_public!(_, "Professor is required");
        }
        let description = description.trim().to_string();
        if description.is_empty() {
            bail_public!(_, "Description is required");
        }

        let gen_ed = validation::parse_gen_ed(&gen_ed)?;
        let difficulty = validation::parse_difficulty(&difficulty)?;
        let attendance = if let Some(ref attendance_str) = attendance {
            validation::parse_attendance(attendance_str)?
        } else {
            Attendance::default()
        };
        let exams = if let Some(ref exams_str) = exams {
            validation::parse_exam_format(exams_str)?
        } else {
            ExamFormat::default()
        };
        let rmp_link = rmp_link
            .map(|link| link.trim().to_string())
            .filter(|link| !link.is_empty());

        let mut data = self.data.lock().unwrap();

        if data.find_class(&code).is_some() {
            drop(data);
            bail_public!(
                _,
                "Class '{}' already exists in the directory. Remove it first to replace the entry.",
                code
            );
        }

        let today = local_date_today();
        data.add_class(Class {
            code: code.clone(),
            name,
            professor,
            description,
            gen_ed,
            difficulty,
            attendance,
            exams,
            rmp_link,
            created_at: today,
            updated_at: today,
        });
        drop(data);

        if let Err(e) = self.save_data_with_message(&format!("Add class {}", code)) {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!("Class added with code: {}", code))
    }

    /// Removes a class from the directory by course code (access-gated).
    pub async fn handle_remove_class(
        &self,
        access_code: String,
        code: String,
    ) -> McpResult<String> {
        self.check_access(&access_code)?;

        let code = validation::normalize_course_code(&code);
        let mut data = self.data.lock().unwrap();

        let Some(class) = data.remove_class(&code) else {
            drop(data);
            bail_public!(_, "Class '{}' not found in the directory", code);
        };
        drop(data);

        if let Err(e) = self.save_data_with_message(&format!("Remove class {}", code)) {
            bail_public!(_, "Failed to save: {}", e);
        }

        Ok(format!("Class removed: [{}] {}", code, class.name))
    }
}
