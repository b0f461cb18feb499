// Text menu commands and range/colour prompts

use crate::colour::HexColour;
use crate::config::pattern_config::COLOUR_COUNT_RANGE;
use crate::pattern_errors::{PatternError, PatternResult};
use std::io::{BufRead, Write};
use std::ops::RangeInclusive;

/// Typed when the user is done entering colours
pub const FINISH_COLOURS: &str = "$$$";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    DrawPattern,
    ChangeConfig,
    NewConfig,
    Quit,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 4] = [
        MenuCommand::DrawPattern,
        MenuCommand::ChangeConfig,
        MenuCommand::NewConfig,
        MenuCommand::Quit,
    ];

    /// Menu entries are numbered from 1
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuCommand::DrawPattern),
            "2" => Some(MenuCommand::ChangeConfig),
            "3" => Some(MenuCommand::NewConfig),
            "4" => Some(MenuCommand::Quit),
            _ => None,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            MenuCommand::DrawPattern => "Draw Pattern",
            MenuCommand::ChangeConfig => "Change Config File",
            MenuCommand::NewConfig => "New Config File",
            MenuCommand::Quit => "Quit",
        }
    }
}

/// Line-oriented prompts over any reader/writer pair
pub struct Prompter<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    /// Print `text` and read one trimmed line. End of input is an error so
    /// prompt loops cannot spin forever.
    pub fn read_line(&mut self, text: &str) -> PatternResult<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(PatternError::Io("input closed".to_string()));
        }
        Ok(line.trim().to_string())
    }

    pub fn say(&mut self, text: &str) -> PatternResult<()> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn read_int(&mut self, text: &str) -> PatternResult<i64> {
        loop {
            match self.read_line(text)?.parse::<i64>() {
                Ok(n) => return Ok(n),
                Err(_) => self.say("\nERROR: You didn't enter a number. Please try again...")?,
            }
        }
    }

    pub fn read_in_range(&mut self, text: &str, range: RangeInclusive<i64>) -> PatternResult<i64> {
        loop {
            let n = self.read_int(text)?;
            if range.contains(&n) {
                return Ok(n);
            }
            self.say(&format!(
                "\nERROR: Your number wasn't in the correct range of {} to {}. Please try again...",
                range.start(),
                range.end()
            ))?;
        }
    }

    /// Collect hex colours until the user types `$$$` (allowed once two are
    /// entered) or the palette is full
    pub fn read_colours(&mut self) -> PatternResult<Vec<HexColour>> {
        let max = *COLOUR_COUNT_RANGE.end();
        let min = *COLOUR_COUNT_RANGE.start();
        let mut colours = Vec::new();

        while colours.len() < max {
            let text = if colours.len() < min {
                format!("\nEnter a colour (max. {}): ", max)
            } else {
                format!("\nEnter a colour or '{}' to finish (max. {}): ", FINISH_COLOURS, max)
            };
            let line = self.read_line(&text)?;

            if line == FINISH_COLOURS {
                if colours.len() >= min {
                    break;
                }
                self.say(&format!(
                    "\nERROR: You can't finish with less than {} colours chosen. Please try again...",
                    min
                ))?;
                continue;
            }

            match HexColour::parse(&line) {
                Ok(colour) => colours.push(colour),
                Err(_) => self.say("\nERROR: Invalid hex code input. Please try again...")?,
            }
        }

        Ok(colours)
    }

    pub fn read_command(&mut self) -> PatternResult<MenuCommand> {
        loop {
            self.say("\nPlease enter the number of the function you would like to execute: ")?;
            for (i, command) in MenuCommand::ALL.iter().enumerate() {
                self.say(&format!("\t[{}] {}", i + 1, command.title()))?;
            }
            match MenuCommand::parse(&self.read_line("")?) {
                Some(command) => return Ok(command),
                None => self.say("\nERROR: Invalid input. Please try again...")?,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    fn output(p: &mut Prompter<Cursor<Vec<u8>>, Vec<u8>>) -> String {
        String::from_utf8_lossy(p.output()).to_string()
    }

    #[test]
    fn test_parse_menu_commands() {
        assert_eq!(MenuCommand::parse("1"), Some(MenuCommand::DrawPattern));
        assert_eq!(MenuCommand::parse(" 4\n"), Some(MenuCommand::Quit));
        assert_eq!(MenuCommand::parse("5"), None);
        assert_eq!(MenuCommand::parse("draw"), None);
    }

    #[test]
    fn test_read_in_range_reprompts() {
        let mut p = prompter("abc\n2000\n-1\n640\n");
        assert_eq!(p.read_in_range("width: ", 0..=1000).unwrap(), 640);
        let out = output(&mut p);
        assert!(out.contains("didn't enter a number"));
        assert_eq!(out.matches("correct range of 0 to 1000").count(), 2);
    }

    #[test]
    fn test_read_colours_needs_two_before_finish() {
        let mut p = prompter("#fff\n$$$\nblue\n#000\n$$$\n");
        let colours = p.read_colours().unwrap();
        assert_eq!(
            colours.iter().map(HexColour::as_str).collect::<Vec<_>>(),
            vec!["#fff", "#000"]
        );
        let out = output(&mut p);
        assert!(out.contains("can't finish with less than 2"));
        assert!(out.contains("Invalid hex code"));
    }

    #[test]
    fn test_read_colours_stops_at_ten() {
        let input = "#123\n".repeat(12);
        let mut p = prompter(&input);
        assert_eq!(p.read_colours().unwrap().len(), 10);
    }

    #[test]
    fn test_read_command_skips_bad_input() {
        let mut p = prompter("9\n3\n");
        assert_eq!(p.read_command().unwrap(), MenuCommand::NewConfig);
        assert!(output(&mut p).contains("[2] Change Config File"));
    }

    #[test]
    fn test_end_of_input_is_an_error() {
        let mut p = prompter("");
        assert!(matches!(p.read_int("n: "), Err(PatternError::Io(_))));
    }
}
