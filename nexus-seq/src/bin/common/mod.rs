//! Task records shared by the demo binaries.

use std::fs::File;
use std::io::{self, BufRead, BufReader};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub number: i32,
    pub name: String,
}

/// Reads `number name` records until EOF or the first malformed line.
pub fn read_tasks(reader: impl BufRead) -> io::Result<Vec<Task>> {
    let mut tasks = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let mut fields = line.split_whitespace();
        let (Some(number), Some(name)) = (fields.next(), fields.next()) else {
            break;
        };
        let Ok(number) = number.parse() else {
            break;
        };
        tasks.push(Task {
            number,
            name: name.to_string(),
        });
    }
    Ok(tasks)
}

/// Reads tasks from `path`, or from stdin when no path is given.
pub fn load_tasks(path: Option<&str>) -> io::Result<Vec<Task>> {
    match path {
        Some(path) => read_tasks(BufReader::new(File::open(path)?)),
        None => read_tasks(io::stdin().lock()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(number: i32, name: &str) -> Task {
        Task {
            number,
            name: name.to_string(),
        }
    }

    #[test]
    fn reads_number_name_records() {
        let input = "3 backup\n1 deploy extra-field\n  7\tlint\n";
        let tasks = read_tasks(input.as_bytes()).unwrap();

        assert_eq!(
            tasks,
            vec![task(3, "backup"), task(1, "deploy"), task(7, "lint")]
        );
    }

    #[test]
    fn stops_at_first_malformed_line() {
        let input = "1 a\nnot-a-number b\n2 c\n";
        assert_eq!(read_tasks(input.as_bytes()).unwrap(), vec![task(1, "a")]);

        let input = "1 a\n5\n2 c\n";
        assert_eq!(read_tasks(input.as_bytes()).unwrap(), vec![task(1, "a")]);
    }

    #[test]
    fn empty_input() {
        assert!(read_tasks("".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load_tasks(Some("/nonexistent/nexus-seq/tasks.txt")).is_err());
    }
}
