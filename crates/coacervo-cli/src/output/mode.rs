use crate::cli::Commands;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn mode_for_command(command: &Commands) -> OutputMode {
    match command {
        Commands::Series { json, .. }
        | Commands::Ratios { json, .. }
        | Commands::Categories { json, .. }
        | Commands::Names { json, .. }
        | Commands::Weekdays { json, .. }
        | Commands::Totals { json, .. }
        | Commands::Worth { json, .. }
        | Commands::Coverage { json, .. }
        | Commands::Check { json, .. } => {
            if *json {
                OutputMode::Json
            } else {
                OutputMode::Text
            }
        }
    }
}
