/// A simple text-based table generator for terminal output
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
}

impl Table {
    /// Create a new table with the given headers
    pub fn new(headers: Vec<&str>) -> Self {
        let col_widths = headers.iter().map(|h| h.len()).collect();
        let headers = headers.iter().map(|h| h.to_string()).collect();
        Table {
            headers,
            rows: Vec::new(),
            col_widths,
        }
    }

    /// Add a row to the table
    pub fn add_row(&mut self, row: Vec<&str>) {
        let row_strings: Vec<String> = row.iter().map(|s| s.to_string()).collect();

        // Update column widths if needed
        for (i, col) in row_strings.iter().enumerate() {
            if i < self.col_widths.len() {
                self.col_widths[i] = self.col_widths[i].max(col.len());
            }
        }

        self.rows.push(row_strings);
    }

    /// Render the table as a formatted string
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_row(&self.headers));
        output.push('\n');

        output.push_str(&self.render_separator());
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output
    }

    /// Render a single row with proper spacing
    fn render_row(&self, row: &[String]) -> String {
        let mut line = String::new();
        for (i, col) in row.iter().enumerate() {
            if i < self.col_widths.len() {
                let width = self.col_widths[i];
                line.push_str(&format!("{:<width$}", col, width = width));
                if i < row.len() - 1 {
                    line.push_str(" | ");
                }
            }
        }
        line
    }

    /// Render a separator line
    fn render_separator(&self) -> String {
        let mut line = String::new();
        for (i, &width) in self.col_widths.iter().enumerate() {
            line.push_str(&"-".repeat(width));
            if i < self.col_widths.len() - 1 {
                line.push_str("-+-");
            }
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_table() {
        let mut table = Table::new(vec!["Type", "Amount"]);
        table.add_row(vec!["deposit", "50.00"]);
        table.add_row(vec!["withdraw", "20.00"]);

        let rendered = table.render();
        assert!(rendered.contains("Type"));
        assert!(rendered.contains("Amount"));
        assert!(rendered.contains("deposit"));
        assert!(rendered.contains("withdraw"));
    }

    #[test]
    fn test_columns_widen_to_fit_rows() {
        let mut table = Table::new(vec!["T", "A"]);
        table.add_row(vec!["transfer", "1000.00"]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        // Header, separator and data rows all share the widened layout
        assert_eq!(lines[0].len(), lines[2].len());
        assert!(lines[0].starts_with("T        | "));
    }
}
