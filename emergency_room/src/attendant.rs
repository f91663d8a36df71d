use log::info;
use patients::Patient;
use prompt::{prompt_user_for_menu_option, MenuOption};
use std::io::{self, BufRead, Write};
use vector_heap::{HeapError, PriorityQueue};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub struct Attendant<W: Write> {
    output: W,
    format: OutputFormat,
}

impl<W: Write> Attendant<W> {
    pub fn new(output: W, format: OutputFormat) -> Self {
        Self { output, format }
    }

    /// Runs the menu until every patient has been attended, the user exits or
    /// the input runs out.
    pub fn run<Q, R>(&mut self, queue: &mut Q, input: &mut R) -> io::Result<()>
    where
        Q: PriorityQueue<Patient>,
        R: BufRead,
    {
        while !queue.is_empty() {
            match prompt_user_for_menu_option(input, &mut self.output)? {
                Some(MenuOption::AttendNext) => self.attend_next(queue)?,
                Some(MenuOption::ShowWaiting) => {
                    writeln!(self.output, "waiting patients: {}", queue.len())?;
                }
                Some(MenuOption::Exit) => {
                    writeln!(self.output, "finishing...")?;
                    return Ok(());
                }
                None => return Ok(()),
            }
        }
        writeln!(self.output, "\nall patients have been attended.")
    }

    fn attend_next<Q: PriorityQueue<Patient>>(&mut self, queue: &mut Q) -> io::Result<()> {
        let patient = match queue.extract_min() {
            Ok(patient) => patient,
            Err(HeapError::EmptyContainer) => {
                return writeln!(self.output, "no patients waiting.");
            }
        };
        match self.format {
            OutputFormat::Text => {
                writeln!(self.output, "\n-------------------------------------------------------")?;
                writeln!(self.output, "attending patient:")?;
                writeln!(self.output, "name: {}", patient.name)?;
                writeln!(self.output, "symptom: {}", patient.symptom)?;
                writeln!(self.output, "priority: {}", patient.code)?;
                writeln!(self.output, "-------------------------------------------------------")?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.output, &patient)?;
                writeln!(self.output)?;
            }
        }
        info!("patient attended: {}", patient);
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
