use std::fmt;

#[derive(Debug, Clone)]
/// A bordered text table: one header row plus data rows, rendered through
/// `Display` as the classic `+---+---+` box with padded, left-aligned
/// cells. Column widths follow the widest cell.
///
/// # Examples
/// ```
/// use bank_ledger::io::table::Table;
///
/// let mut table = Table::new(["Field", "Value"]);
/// table.row(["Account Holder", "Alice"]);
///
/// let rendered = table.to_string();
/// assert!(rendered.starts_with("+-"));
/// assert!(rendered.contains("| Account Holder | Alice |"));
/// ```
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                let len = cell.chars().count();
                match widths.get_mut(i) {
                    Some(w) => *w = (*w).max(len),
                    None => widths.push(len),
                }
            }
        }
        widths
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let widths = self.widths();
        let border = border_line(&widths);

        writeln!(f, "{}", border)?;
        writeln!(f, "{}", row_line(&self.header, &widths))?;
        write!(f, "{}", border)?;
        for row in &self.rows {
            write!(f, "\n{}", row_line(row, &widths))?;
        }
        if !self.rows.is_empty() {
            write!(f, "\n{}", border)?;
        }
        Ok(())
    }
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line
}

fn row_line(cells: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (i, w) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        line.push_str(&format!(" {:<width$} |", cell, width = *w));
    }
    line
}
