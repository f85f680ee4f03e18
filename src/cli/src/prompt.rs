//! Interactive prompts for search inputs and the export format.

use github_repo_export::{ExportFormat, SearchFilters};
use std::io::{self, BufRead, Write};

/// Answers collected before fetching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchInputs {
    pub query: String,
    pub filters: Option<SearchFilters>,
    pub max_pages: u32,
}

/// Reads line-based answers from `input`, writing questions to `output`.
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Asks one question and returns the trimmed answer.
    ///
    /// End of input is an error, so a closed stdin cannot loop forever.
    pub fn ask(&mut self, question: &str) -> io::Result<String> {
        write!(self.output, "{question}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed while waiting for an answer",
            ));
        }
        Ok(line.trim().to_string())
    }

    /// Collects query, filters and page count.
    pub fn search_inputs(&mut self) -> io::Result<SearchInputs> {
        let query = loop {
            let query = self.ask("Enter your search query: ")?;
            if !query.is_empty() {
                break query;
            }
            writeln!(self.output, "The search query must not be empty.")?;
        };

        let apply = self.ask("Do you want to apply filters? (yes/no): ")?;
        let filters = if matches!(apply.to_ascii_lowercase().as_str(), "yes" | "y") {
            let language = self.ask("Filter by programming language (leave blank for none): ")?;
            let sort = self.ask("Sort by (stars/forks): ")?;
            let order = self.ask("Order (asc/desc): ")?;
            Some(SearchFilters::from_input(
                Some(&language),
                Some(&sort),
                Some(&order),
            ))
        } else {
            None
        };

        let max_pages = loop {
            let answer = self.ask("How many pages to scrape? (e.g., 1, 2, 5): ")?;
            match answer.parse::<u32>() {
                Ok(pages) if pages > 0 => break pages,
                _ => writeln!(self.output, "Please enter a positive whole number.")?,
            }
        };

        Ok(SearchInputs {
            query,
            filters,
            max_pages,
        })
    }

    /// Shows the format menu and returns the raw choice.
    pub fn export_choice(&mut self) -> io::Result<String> {
        writeln!(self.output, "Choose the format to save the results:")?;
        for format in ExportFormat::ALL {
            writeln!(self.output, "[{}] {}", format.menu_number(), format.label())?;
        }
        self.ask("Enter your choice (1/2/3/4): ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use github_repo_export::{SortKey, SortOrder};
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn collects_inputs_without_filters() {
        let mut prompter = prompter("tokio\nno\n2\n");

        let inputs = prompter.search_inputs().unwrap();

        assert_eq!(
            inputs,
            SearchInputs {
                query: "tokio".to_string(),
                filters: None,
                max_pages: 2,
            }
        );
    }

    #[test]
    fn collects_filters_and_ignores_invalid_ones() {
        let mut prompter = prompter("web\nyes\nRust\nwatchers\nDESC\n1\n");

        let inputs = prompter.search_inputs().unwrap();
        let filters = inputs.filters.unwrap();

        assert_eq!(filters.language.as_deref(), Some("Rust"));
        assert_eq!(filters.sort, None);
        assert_eq!(filters.order, Some(SortOrder::Desc));
    }

    #[test]
    fn reasks_until_values_are_valid() {
        let mut prompter = prompter("\ncli\nyes\n\nstars\n\nzero\n0\n3\n");

        let inputs = prompter.search_inputs().unwrap();

        assert_eq!(inputs.query, "cli");
        assert_eq!(inputs.max_pages, 3);
        assert_eq!(inputs.filters.unwrap().sort, Some(SortKey::Stars));
        let output = String::from_utf8(prompter.output).unwrap();
        assert!(output.contains("The search query must not be empty."));
        assert_eq!(output.matches("Please enter a positive whole number.").count(), 2);
    }

    #[test]
    fn closed_input_is_an_error() {
        let mut prompter = prompter("tokio\n");
        let result = prompter.search_inputs();
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }

    #[test]
    fn export_menu_lists_all_formats() {
        let mut prompter = prompter(" 3 \n");

        let choice = prompter.export_choice().unwrap();

        assert_eq!(choice, "3");
        let output = String::from_utf8(prompter.output).unwrap();
        assert!(output.contains("[1] CSV"));
        assert!(output.contains("[3] SQLite Database"));
        assert!(output.contains("[4] Excel"));
    }
}
