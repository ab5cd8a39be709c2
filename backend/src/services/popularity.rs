use crate::db;
use crate::models::PersonLikeCount;
use anyhow::Result;
use sqlx::PgPool;

/// Retains the persons whose like count strictly exceeds `threshold`.
/// A person sitting exactly at the threshold is not popular; dislikes
/// never enter the tally.
pub fn filter_popular(rows: Vec<PersonLikeCount>, threshold: i64) -> Vec<PersonLikeCount> {
    rows.into_iter()
        .filter(|row| row.likes_count > threshold)
        .collect()
}

/// Full scan: every person's like count, filtered by the threshold.
/// Read-only; concurrent writes during the scan may or may not be
/// included (this is a reporting job, not a snapshot).
pub async fn find_popular(pool: &PgPool, threshold: i64) -> Result<Vec<PersonLikeCount>> {
    let rows = db::people::like_counts(pool).await?;
    Ok(filter_popular(rows, threshold))
}

/// Renders the CLI summary table (ID, Name, Age, Location, Likes).
pub fn render_table(rows: &[PersonLikeCount]) -> String {
    let headers = ["ID", "Name", "Age", "Location", "Likes"];

    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|row| {
            [
                row.id.to_string(),
                row.name.clone(),
                row.age.to_string(),
                row.location.clone(),
                row.likes_count.to_string(),
            ]
        })
        .collect();

    let mut widths = [0usize; 5];
    for (i, header) in headers.iter().enumerate() {
        widths[i] = header.len();
    }
    for row in &cells {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.len());
        }
    }

    let separator = {
        let mut line = String::from("+");
        for width in widths {
            line.push_str(&"-".repeat(width + 2));
            line.push('+');
        }
        line
    };

    let format_row = |row: &[String; 5]| {
        let mut line = String::from("|");
        for (i, cell) in row.iter().enumerate() {
            line.push_str(&format!(" {:<width$} |", cell, width = widths[i]));
        }
        line
    };

    let header_cells: [String; 5] = headers.map(String::from);

    let mut out = String::new();
    out.push_str(&separator);
    out.push('\n');
    out.push_str(&format_row(&header_cells));
    out.push('\n');
    out.push_str(&separator);
    out.push('\n');
    for row in &cells {
        out.push_str(&format_row(row));
        out.push('\n');
    }
    out.push_str(&separator);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person(id: i64, likes: i64) -> PersonLikeCount {
        PersonLikeCount {
            id,
            name: format!("Person {id}"),
            age: 30,
            location: "5 km".to_string(),
            likes_count: likes,
        }
    }

    #[test]
    fn threshold_is_strict() {
        // exactly 50 likes is not popular, 51 is
        let rows = vec![person(1, 50), person(2, 51)];
        let popular = filter_popular(rows, 50);
        assert_eq!(popular.len(), 1);
        assert_eq!(popular[0].id, 2);
    }

    #[test]
    fn dislikes_never_count() {
        // 30 likes + any number of dislikes stays below a threshold of 50;
        // the tally only ever contains likes
        let rows = vec![person(1, 30)];
        assert!(filter_popular(rows, 50).is_empty());
    }

    #[test]
    fn custom_threshold() {
        let rows = vec![person(1, 25)];
        let popular = filter_popular(rows, 20);
        assert_eq!(popular.len(), 1);
    }

    #[test]
    fn empty_scan_yields_nothing() {
        assert!(filter_popular(Vec::new(), 50).is_empty());
    }

    #[test]
    fn table_contains_headers_and_rows() {
        let table = render_table(&[person(7, 55)]);
        let lines: Vec<&str> = table.lines().collect();

        assert!(lines[1].contains("ID"));
        assert!(lines[1].contains("Likes"));
        assert!(table.contains("Person 7"));
        assert!(table.contains("55"));
        // border rows above, below the header and at the bottom
        assert_eq!(lines.iter().filter(|l| l.starts_with('+')).count(), 3);
    }
}
