//! CSV import/export for board content.
//!
//! Format: a fixed `Category,Question,Answer,Points` header, then one row per
//! question. The three text fields are double-quoted with embedded quotes
//! doubled; points are a bare integer.
//!
//! Parsing is deliberately forgiving. Missing fields fall back to
//! placeholder text, unreadable points become 0, and a bad row never aborts
//! the import.

use crate::types::{Category, Question, MAX_CATEGORIES};

pub const CSV_HEADER: &str = "Category,Question,Answer,Points";

pub const CATEGORY_PLACEHOLDER: &str = "Category not found";
pub const QUESTION_PLACEHOLDER: &str = "Question not found";
pub const ANSWER_PLACEHOLDER: &str = "Answer not found";
pub const POINTS_PLACEHOLDER: &str = "???";

/// Serialize every question with text. Empty slots are skipped.
pub fn export_csv(categories: &[Category]) -> String {
    let mut csv = String::with_capacity(64 * categories.len());
    csv.push_str(CSV_HEADER);
    csv.push('\n');

    for category in categories {
        for question in category.questions.iter().filter(|q| q.has_text()) {
            csv.push_str(&format!(
                "{},{},{},{}\n",
                quote(&category.name),
                quote(&question.text),
                quote(&question.answer),
                question.points
            ));
        }
    }

    csv
}

/// Parse exported text back into categories.
///
/// The first line is always treated as the header and dropped. Rows are
/// grouped by exact category name in order of first appearance; rows for an
/// 11th distinct category are skipped, as are rows past a category's 10th
/// question.
pub fn parse_csv(text: &str) -> Vec<Category> {
    let mut categories: Vec<Category> = Vec::new();

    for (line_no, line) in text.split('\n').enumerate().skip(1) {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            continue;
        }

        let [name, question, answer, points] = parse_row(line);

        let idx = match categories.iter().position(|c| c.name == name) {
            Some(idx) => idx,
            None if categories.len() < MAX_CATEGORIES => {
                categories.push(Category::new(name));
                categories.len() - 1
            }
            None => {
                tracing::debug!(
                    "Skipping line {}: category limit ({}) reached",
                    line_no + 1,
                    MAX_CATEGORIES
                );
                continue;
            }
        };

        let category = &mut categories[idx];
        if category.is_full() {
            tracing::debug!(
                "Skipping line {}: category '{}' is full",
                line_no + 1,
                category.name
            );
            continue;
        }

        category
            .questions
            .push(Question::new(question, answer, parse_points(&points)));
    }

    categories
}

fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

/// Split one row into exactly four fields, honouring quotes
fn parse_row(line: &str) -> [String; 4] {
    let mut fields = Vec::with_capacity(4);
    let mut start = 0;
    let mut in_quotes = false;

    for (i, ch) in line.char_indices() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(unquote(&line[start..i]));
                start = i + 1;
            }
            _ => {}
        }
    }
    fields.push(unquote(&line[start..]));

    let mut fields = fields.into_iter();
    let mut next_or = |placeholder: &str| {
        fields
            .next()
            .filter(|f| !f.is_empty())
            .unwrap_or_else(|| placeholder.to_string())
    };

    [
        next_or(CATEGORY_PLACEHOLDER),
        next_or(QUESTION_PLACEHOLDER),
        next_or(ANSWER_PLACEHOLDER),
        next_or(POINTS_PLACEHOLDER),
    ]
}

/// Drop one surrounding quote on each side and collapse doubled quotes
fn unquote(raw: &str) -> String {
    let s = raw.strip_prefix('"').unwrap_or(raw);
    let s = s.strip_suffix('"').unwrap_or(s);
    s.replace("\"\"", "\"")
}

/// Leading-integer parse: optional sign then digits, anything else after is
/// ignored. No digits at all (e.g. the "???" placeholder) gives 0; a digit
/// run too large for `i64` saturates.
fn parse_points(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    rest.bytes()
        .take_while(u8::is_ascii_digit)
        .map(|b| i64::from(b - b'0'))
        .fold(0i64, |acc, digit| {
            if negative {
                acc.saturating_mul(10).saturating_sub(digit)
            } else {
                acc.saturating_mul(10).saturating_add(digit)
            }
        })
}
