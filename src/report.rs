use crate::error::QuizError;
use crate::snapshot::Results;
use crate::utils::format_duration;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Writes finished results to `path`: JSON for a `.json` extension,
/// a markdown transcript otherwise.
pub fn write_report(path: &Path, results: &Results) -> Result<(), QuizError> {
    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let content = if is_json {
        serde_json::to_string_pretty(results)?
    } else {
        render_markdown(results)
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}

pub fn render_markdown(results: &Results) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# Quiz Results");
    let _ = writeln!(out);
    let _ = writeln!(out, "**Score:** {}/{}", results.score, results.total);
    let _ = writeln!(out, "**Percentage:** {:.2}%", results.percentage);
    let _ = writeln!(
        out,
        "**Total Time:** {}",
        format_duration(results.total_elapsed)
    );
    let _ = writeln!(
        out,
        "**Average Time per Question:** {}",
        format_duration(results.average_per_question)
    );

    for entry in &results.entries {
        let _ = writeln!(out);
        let _ = writeln!(out, "## Question {}", entry.number);
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", entry.question.text);
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "- Your answer: {} ({})",
            entry.answer,
            if entry.correct { "correct" } else { "incorrect" }
        );
        let _ = writeln!(out, "- Correct answer: {}", entry.question.correct_answer);
        let _ = writeln!(out, "- Time taken: {}", format_duration(entry.duration));
        let _ = writeln!(out, "- Explanation: {}", entry.question.explanation);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bank::QUESTION_BANK;
    use crate::models::AnswerRecord;
    use crate::snapshot::ReviewEntry;
    use std::time::Duration;

    fn create_test_results() -> Results {
        let entries = vec![
            ReviewEntry {
                number: 1,
                question: QUESTION_BANK[0],
                answer: AnswerRecord::Answered("8".to_string()),
                correct: true,
                duration: Duration::from_secs(4),
            },
            ReviewEntry {
                number: 2,
                question: QUESTION_BANK[3],
                answer: AnswerRecord::Expired,
                correct: false,
                duration: Duration::from_secs(30),
            },
        ];
        Results::new(entries, 1, Duration::from_secs(36))
    }

    #[test]
    fn test_markdown_transcript() {
        let md = render_markdown(&create_test_results());
        assert!(md.contains("**Score:** 1/2"));
        assert!(md.contains("**Percentage:** 50.00%"));
        assert!(md.contains("**Total Time:** 0:00:36"));
        assert!(md.contains("**Average Time per Question:** 0:00:18"));
        assert!(md.contains("- Your answer: 8 (correct)"));
        assert!(md.contains("- Your answer: Time expired (incorrect)"));
        assert!(md.contains("- Correct answer: append()"));
    }

    #[test]
    fn test_write_json_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.json");
        write_report(&path, &create_test_results()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["score"], 1);
        assert_eq!(value["total"], 2);
        assert_eq!(value["entries"][1]["answer"]["kind"], "expired");
        assert_eq!(value["entries"][0]["question"]["correct_answer"], "8");
    }

    #[test]
    fn test_write_markdown_report_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("run.md");
        write_report(&path, &create_test_results()).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Quiz Results"));
    }
}
