use std::fmt::Write;
use crate::books::dto::BookDto;

const REPORT_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Bookstore Inventory Report</title>
    <style>
        body { font-family: Arial, sans-serif; margin: 40px; }
        table { width: 100%; border-collapse: collapse; margin-top: 20px; }
        th, td { border: 1px solid #dddddd; text-align: left; padding: 8px; }
        th { background-color: #f2f2f2; }
    </style>
</head>
<body>
    <h2>Bookstore Inventory Report</h2>
    <table>
        <thead>
            <tr>
                <th>title</th>
                <th>author</th>
                <th>category</th>
                <th>Year</th>
                <th>price</th>
            </tr>
        </thead>
        <tbody>
"#;

const REPORT_TAIL: &str = r#"        </tbody>
    </table>
</body>
</html>
"#;

/// Renders the inventory table, one row per book in the given order.
pub fn render_report(books: &[BookDto]) -> String {
    let mut html = String::with_capacity(REPORT_HEAD.len() + REPORT_TAIL.len() + books.len() * 256);
    html.push_str(REPORT_HEAD);
    for book in books {
        html.push_str("            <tr>\n");
        for cell in [
            escape_html(book.title.as_str()),
            escape_html(book.author.as_str()),
            escape_html(book.category.as_str()),
            book.year.to_string(),
            book.price.to_string(),
        ] {
            // writing into a String cannot fail
            let _ = writeln!(html, "                <td>{}</td>", cell);
        }
        html.push_str("            </tr>\n");
    }
    html.push_str(REPORT_TAIL);
    html
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use crate::books::dto::BookDto;
    use crate::catalog::report::{escape_html, render_report};

    #[tokio::test]
    async fn test_should_render_empty_report() {
        let html = render_report(&[]);
        assert!(html.contains("<!DOCTYPE html>"));
        assert!(html.contains("<th>title</th>"));
        assert!(html.contains("<th>author</th>"));
        assert!(html.contains("<th>price</th>"));
        assert!(!html.contains("<td>"));
    }

    #[tokio::test]
    async fn test_should_render_one_row_per_book() {
        let book = BookDto::new("1234567890", "T", "C", "A", 2020, Decimal::new(999, 2));
        let html = render_report(&[book]);
        assert_eq!(2, html.matches("<tr>").count());
        let row = "                <td>T</td>\n                <td>A</td>\n                <td>C</td>\n                <td>2020</td>\n                <td>9.99</td>\n";
        assert!(html.contains(row));
    }

    #[tokio::test]
    async fn test_should_escape_markup() {
        assert_eq!("Tom &amp; Jerry &lt;3", escape_html("Tom & Jerry <3"));
        let book = BookDto::new("1234567890", "<script>", "C", "A", 2020, Decimal::ONE);
        let html = render_report(&[book]);
        assert!(html.contains("<td>&lt;script&gt;</td>"));
    }
}
