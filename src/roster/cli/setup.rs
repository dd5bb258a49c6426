use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version)]
#[command(about = "Keep student records in a JSON file", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use the per-user data directory instead of ./.roster
    #[arg(short, long, global = true)]
    pub global: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a student record
    #[command(alias = "a")]
    Add {
        /// Student id (whole number)
        student_id: String,

        /// Full name
        name: String,

        /// Age in years (whole number)
        age: String,

        /// Grade
        grade: String,
    },

    /// Find students by exact id or by part of their name
    #[command(alias = "s")]
    Search { term: String },

    /// Change one field (name, age or grade) of a student
    #[command(alias = "u")]
    Update {
        /// Id of the student to update
        student_id: String,

        /// Field to change: name, age or grade
        field: String,

        /// New value
        value: String,
    },

    /// List all students
    #[command(alias = "ls")]
    List,

    /// Mean, median and standard deviation of student ages
    Stats,

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, indent, log-to-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add() {
        let cli = Cli::try_parse_from(["roster", "add", "1", "Jane Doe", "20", "A"]).unwrap();
        match cli.command {
            Some(Commands::Add {
                student_id, name, ..
            }) => {
                assert_eq!(student_id, "1");
                assert_eq!(name, "Jane Doe");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn parses_update_with_global_flag_anywhere() {
        let cli = Cli::try_parse_from(["roster", "update", "1", "grade", "A+", "-g"]).unwrap();
        assert!(cli.global);
        assert!(matches!(cli.command, Some(Commands::Update { .. })));
    }

    #[test]
    fn no_subcommand_is_allowed() {
        let cli = Cli::try_parse_from(["roster"]).unwrap();
        assert!(cli.command.is_none());
    }
}
