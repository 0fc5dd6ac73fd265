use std::io::Write;

use crate::{Validation, Validator};

/// The per-service outcome of a [`run`].
#[derive(Debug, Default)]
pub struct Summary {
    results: Vec<(&'static str, bool)>,
}

impl Summary {
    pub fn all_valid(&self) -> bool {
        self.results.iter().all(|&(_, valid)| valid)
    }

    pub fn is_valid(&self, service: &str) -> Option<bool> {
        self.results
            .iter()
            .find_map(|&(name, valid)| (name == service).then_some(valid))
    }
}

/// Runs every validator in order and writes the report to `out`.
///
/// Each validator runs regardless of how the previous ones went.
pub async fn run<W>(out: &mut W, validators: &[&dyn Validator]) -> anyhow::Result<Summary>
where
    W: Write + ?Sized,
{
    writeln!(out, "Checking API credentials...")?;
    writeln!(out)?;

    let mut summary = Summary::default();
    for validator in validators {
        let service = validator.service();
        log::debug!("validating {service} credentials");

        let validation = validator.validate().await;
        log_validation(service, &validation);
        writeln!(out, "{}", validation.outcome(service))?;

        summary.results.push((service, validation.is_valid()));
    }

    writeln!(out)?;
    writeln!(out, "Credentials Summary:")?;
    for &(service, valid) in &summary.results {
        let status = if valid { "✅ Valid" } else { "❌ Invalid" };
        writeln!(out, "{service}: {status}")?;
    }

    writeln!(out)?;
    if summary.all_valid() {
        writeln!(out, "🎉 All credentials are working!")?;
    } else {
        writeln!(out, "⚠️  Please fix invalid credentials before proceeding.")?;
    }

    out.flush()?;
    Ok(summary)
}

fn log_validation(service: &str, validation: &Validation) {
    match validation {
        Validation::Valid => log::debug!("{service}: valid"),
        Validation::MissingConfig { missing } => {
            log::warn!("{service}: missing {}", missing.join(", "))
        }
        Validation::Rejected { status, .. } => log::warn!("{service}: rejected with {status}"),
        Validation::TransportError(err) => log::warn!("{service}: {err}"),
    }
}
