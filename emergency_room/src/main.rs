mod args;
mod attendant;

use args::{Args, LoadMode};
use attendant::{Attendant, OutputFormat};
use clap::Parser;
use env_logger::Env;
use log::{error, info};
use patients::{load_patients, Patient};
use std::process::ExitCode;
use vector_heap::{PriorityQueue, VectorHeap};

fn fill_queue(patients: Vec<Patient>, load_mode: LoadMode) -> VectorHeap<Patient> {
    match load_mode {
        LoadMode::Heapify => VectorHeap::build_from(patients),
        LoadMode::Insert => {
            let mut queue = VectorHeap::new();
            for patient in patients {
                info!("patient registered: {}", patient);
                queue.insert(patient);
            }
            queue
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let args = Args::parse();
    info!("starting emergency room triage");

    let patients = match load_patients(&args.patients_file) {
        Ok(patients) => patients,
        Err(e) => {
            error!("could not read {}: {}", args.patients_file.display(), e);
            return ExitCode::FAILURE;
        }
    };
    if patients.is_empty() {
        error!("no patients loaded from {}", args.patients_file.display());
        return ExitCode::FAILURE;
    }
    let mut queue = fill_queue(patients, args.load_mode);

    println!("=======================================================");
    println!("  EMERGENCY ROOM TRIAGE");
    println!("=======================================================");
    println!("waiting patients: {}", queue.len());
    println!("-------------------------------------------------------");

    let format = if args.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let mut attendant = Attendant::new(std::io::stdout().lock(), format);
    if let Err(e) = attendant.run(&mut queue, &mut std::io::stdin().lock()) {
        error!("console i/o failed: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use patients::EmergencyCode;

    fn patients() -> Vec<Patient> {
        [EmergencyCode::C, EmergencyCode::A, EmergencyCode::E, EmergencyCode::B]
            .into_iter()
            .enumerate()
            .map(|(i, code)| Patient::new(format!("patient {i}"), "symptom", code))
            .collect()
    }

    #[test]
    fn both_load_modes_agree() {
        for load_mode in [LoadMode::Heapify, LoadMode::Insert] {
            let mut queue = fill_queue(patients(), load_mode);
            let mut codes = vec![];
            while let Ok(patient) = queue.extract_min() {
                codes.push(patient.code);
            }
            assert_eq!(
                codes,
                [EmergencyCode::A, EmergencyCode::B, EmergencyCode::C, EmergencyCode::E]
            );
        }
    }
}
