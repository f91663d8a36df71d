use std::io::{self, BufRead, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    AttendNext,
    ShowWaiting,
    Exit,
}

impl MenuOption {
    fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(Self::AttendNext),
            2 => Some(Self::ShowWaiting),
            3 => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Keeps asking until a valid option is entered. Returns `None` once the
/// input is exhausted.
pub fn prompt_user_for_menu_option<R, W>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<MenuOption>>
where
    R: BufRead,
    W: Write,
{
    loop {
        writeln!(output, "\noptions:")?;
        writeln!(output, "1. attend next patient")?;
        writeln!(output, "2. show number of waiting patients")?;
        writeln!(output, "3. exit")?;
        write!(output, "select an option: ")?;
        output.flush()?;
        let mut prompt = String::new();
        if input.read_line(&mut prompt)? == 0 {
            return Ok(None);
        }
        match prompt.trim().parse() {
            Ok(number) => match MenuOption::from_number(number) {
                Some(option) => return Ok(Some(option)),
                None => writeln!(output, "invalid option, try again.")?,
            },
            Err(e) => writeln!(output, "could not parse option: {}", e)?,
        }
    }
}
