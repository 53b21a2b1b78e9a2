//! Management of a set of transfer functions and of their product.
//!
//! The [`Manager`] keeps the response of each transfer function up to date
//! with the [`Settings`], as well as the response of the "total" transfer function,
//! the product of all of them.
use std::fmt;

use crate::bode::{self, Response};
use crate::settings::{FreqUnit, Settings};
use crate::sweep::Sweep;
use crate::Error;

/// A transfer function given by its numerator and denominator expressions
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TransferFunction {
    numerator: String,
    denominator: String,
}

impl TransferFunction {
    pub fn new(numerator: impl Into<String>, denominator: impl Into<String>) -> Self {
        TransferFunction {
            numerator: numerator.into(),
            denominator: denominator.into(),
        }
    }

    pub fn numerator(&self) -> &str {
        &self.numerator
    }

    pub fn denominator(&self) -> &str {
        &self.denominator
    }

    /// The full expression: `(numerator)/(denominator)`
    pub fn expression(&self) -> String {
        format!("({})/({})", self.numerator, self.denominator)
    }
}

impl fmt::Display for TransferFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})/({})", self.numerator, self.denominator)
    }
}

/// Owner of the transfer functions and of their responses
#[derive(Debug, Clone, Default)]
pub struct Manager {
    settings: Settings,
    functions: Vec<TransferFunction>,
    responses: Vec<Response>,
    total: Option<Response>,
}

impl Manager {
    pub fn new(settings: Settings) -> Self {
        Manager {
            settings,
            ..Default::default()
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn len(&self) -> usize {
        self.functions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    pub fn functions(&self) -> impl ExactSizeIterator<Item = &TransferFunction> {
        self.functions.iter()
    }

    pub fn function(&self, index: usize) -> Option<&TransferFunction> {
        self.functions.get(index)
    }

    /// Responses, in the same order as [`Manager::functions`]
    pub fn responses(&self) -> &[Response] {
        &self.responses
    }

    pub fn response(&self, index: usize) -> Option<&Response> {
        self.responses.get(index)
    }

    /// Response of the product of all transfer functions.
    /// `None` if there is no transfer function or if the product could not be evaluated.
    pub fn total(&self) -> Option<&Response> {
        self.total.as_ref()
    }

    /// Expression of the product of all transfer functions:
    /// `((n1)*(n2)...)/((d1)*(d2)...)`
    pub fn total_expression(&self) -> Option<String> {
        if self.functions.is_empty() {
            return None;
        }
        let join = |part: fn(&TransferFunction) -> &str| {
            self.functions
                .iter()
                .map(|tf| format!("({})", part(tf)))
                .collect::<Vec<_>>()
                .join("*")
        };
        let num = join(TransferFunction::numerator);
        let den = join(TransferFunction::denominator);
        Some(format!("({})/({})", num, den))
    }

    fn sweep(&self) -> Result<Sweep, Error> {
        Sweep::from_settings(&self.settings)
    }

    /// Evaluate and add a transfer function. Returns its index.
    /// On error nothing is added.
    pub fn add(&mut self, tf: TransferFunction) -> Result<usize, Error> {
        let sweep = self.sweep()?;
        let response = bode::solve_sweep(&tf.expression(), &sweep)?;
        self.functions.push(tf);
        self.responses.push(response);
        self.update_total(&sweep);
        Ok(self.functions.len() - 1)
    }

    /// Replace the transfer function at `index`.
    /// Its response is overwritten in place. On error nothing is changed.
    pub fn update(&mut self, index: usize, tf: TransferFunction) -> Result<(), Error> {
        let sweep = self.sweep()?;
        self.update_one(index, tf, &sweep)?;
        self.update_total(&sweep);
        Ok(())
    }

    /// Replace several transfer functions, and compute the total once.
    ///
    /// A failing item does not prevent the others from being updated.
    /// The first failure is returned as [`Error::Curve`].
    pub fn update_batch<I>(&mut self, updates: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = (usize, TransferFunction)>,
    {
        let sweep = self.sweep()?;
        let mut first_err = None;
        for (index, tf) in updates {
            if let Err(err) = self.update_one(index, tf, &sweep) {
                first_err.get_or_insert(Error::Curve {
                    index,
                    source: Box::new(err),
                });
            }
        }
        self.update_total(&sweep);
        first_err.map_or(Ok(()), Err)
    }

    fn update_one(
        &mut self,
        index: usize,
        tf: TransferFunction,
        sweep: &Sweep,
    ) -> Result<(), Error> {
        let len = self.functions.len();
        if index >= len {
            return Err(Error::IndexOutOfRange(index, len));
        }
        let response = bode::solve_sweep(&tf.expression(), sweep)?;
        self.responses[index].overwrite(&response)?;
        self.functions[index] = tf;
        Ok(())
    }

    /// Remove the transfer function at `index` and return it
    pub fn remove(&mut self, index: usize) -> Result<TransferFunction, Error> {
        let len = self.functions.len();
        if index >= len {
            return Err(Error::IndexOutOfRange(index, len));
        }
        let tf = self.functions.remove(index);
        self.responses.remove(index);
        let sweep = self.sweep()?;
        self.update_total(&sweep);
        Ok(tf)
    }

    /// Remove all transfer functions and the total
    pub fn clear(&mut self) {
        self.functions.clear();
        self.responses.clear();
        self.total = None;
    }

    /// Change the frequency range (in the current unit) and recompute everything.
    /// `min` must be lower than `max`, otherwise nothing is changed.
    pub fn set_freq_range(&mut self, min: f64, max: f64) -> Result<(), Error> {
        self.settings = self.settings.with_freq_range(min, max)?;
        self.recompute_all()
    }

    /// Change the frequency unit and recompute everything.
    /// The range is kept as is, and is therefore interpreted in the new unit.
    pub fn set_unit(&mut self, unit: FreqUnit) -> Result<(), Error> {
        if unit == self.settings.unit() {
            return Ok(());
        }
        self.settings = self.settings.with_unit(unit);
        self.recompute_all()
    }

    /// Change the number of samples and recompute everything
    pub fn set_resolution(&mut self, resolution: usize) -> Result<(), Error> {
        self.settings = self.settings.with_resolution(resolution)?;
        self.recompute_all()
    }

    /// Evaluate again every transfer function and the total.
    ///
    /// A failing function keeps its previous response and does not prevent
    /// the others from being evaluated. The first failure is returned as [`Error::Curve`].
    pub fn recompute_all(&mut self) -> Result<(), Error> {
        let sweep = self.sweep()?;
        log::debug!(
            "Recomputing {} transfer functions over {} samples in [{}, {}] {}",
            self.functions.len(),
            sweep.len(),
            self.settings.min_freq(),
            self.settings.max_freq(),
            self.settings.unit()
        );

        let mut first_err = None;
        for (index, tf) in self.functions.iter().enumerate() {
            match bode::solve_sweep(&tf.expression(), &sweep) {
                Ok(response) => self.responses[index] = response,
                Err(err) => {
                    log::warn!("Could not recompute transfer function #{} {}: {}", index, tf, err);
                    first_err.get_or_insert(Error::Curve {
                        index,
                        source: Box::new(err),
                    });
                }
            }
        }
        self.update_total(&sweep);
        first_err.map_or(Ok(()), Err)
    }

    fn update_total(&mut self, sweep: &Sweep) {
        let Some(expression) = self.total_expression() else {
            self.total = None;
            return;
        };
        log::debug!("Computing total transfer function {}", expression);
        match bode::solve_sweep(&expression, sweep) {
            Ok(response) => self.total = Some(response),
            Err(err) => {
                log::warn!("Could not compute total transfer function: {}", err);
                self.total = None;
            }
        }
    }
}
