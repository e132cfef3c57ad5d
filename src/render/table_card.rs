//! Per-table state for the table-to-card transform.

/// State shared by the table handlers of one rendering pass.
///
/// Header cells feed `headers`; data cells read them back as labels. Reset on
/// every table entry so nothing carries over between tables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableCardState {
    pub headers: Vec<String>,
    pub in_header: bool,
    pub row_index: u32,
}

impl TableCardState {
    pub fn reset(&mut self) {
        self.headers.clear();
        self.in_header = false;
        self.row_index = 0;
    }

    /// Label for a zero-based column; empty when the header row was shorter.
    pub fn label(&self, column: usize) -> &str {
        self.headers.get(column).map(String::as_str).unwrap_or("")
    }

    /// Animation delay for the next card, then advances the row counter.
    pub fn next_row_delay_ms(&mut self, increment_ms: u32) -> u32 {
        let delay = self.row_index.saturating_mul(increment_ms);
        self.row_index += 1;
        delay
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_degrades_to_empty() {
        let state = TableCardState {
            headers: vec!["A".into(), "B".into()],
            ..Default::default()
        };
        assert_eq!(state.label(1), "B");
        assert_eq!(state.label(2), "");
    }

    #[test]
    fn test_row_delay_and_reset() {
        let mut state = TableCardState::default();
        assert_eq!(state.next_row_delay_ms(100), 0);
        assert_eq!(state.next_row_delay_ms(100), 100);
        assert_eq!(state.next_row_delay_ms(100), 200);

        state.headers.push("X".into());
        state.in_header = true;
        state.reset();
        assert_eq!(state, TableCardState::default());
        assert_eq!(state.next_row_delay_ms(100), 0);
    }
}
