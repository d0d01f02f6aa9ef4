//! Cartesian-product expansion of option matrices.
//!
//! An [`AxisSpec`] declares an ordered list of named axes, each with its
//! candidate values. [`expand`] walks every combination in odometer order:
//! the last-declared axis varies fastest, so the output order only depends on
//! the declaration order.

use anyhow::{anyhow, bail, Result};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use tracing::debug;


/// A single candidate value on an axis
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AxisValue {
    Token(String),
    Flag(bool),
}

impl fmt::Display for AxisValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxisValue::Token(token) => f.write_str(token),
            AxisValue::Flag(flag) => write!(f, "{}", flag),
        }
    }
}

impl From<&str> for AxisValue {
    fn from(token: &str) -> Self {
        AxisValue::Token(token.to_string())
    }
}

impl From<String> for AxisValue {
    fn from(token: String) -> Self {
        AxisValue::Token(token)
    }
}

impl From<bool> for AxisValue {
    fn from(flag: bool) -> Self {
        AxisValue::Flag(flag)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Axis {
    pub name: String,
    pub values: Vec<AxisValue>,
}

/// Ordered set of axes to expand
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AxisSpec {
    axes: Vec<Axis>,
}

impl AxisSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an axis with the given candidate values
    pub fn axis<I, V>(mut self, name: &str, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<AxisValue>,
    {
        self.axes.push(Axis {
            name: name.to_string(),
            values: values.into_iter().map(Into::into).collect(),
        });
        self
    }

    /// Append a boolean axis, enumerated as `false` then `true`
    pub fn flag(self, name: &str) -> Self {
        self.axis(name, [false, true])
    }

    pub fn axes(&self) -> &[Axis] {
        &self.axes
    }

    /// Number of combinations `expand` yields for this spec
    pub fn cardinality(&self) -> usize {
        if self.axes.is_empty() {
            return 0;
        }
        self.axes.iter().map(|axis| axis.values.len()).product()
    }

    /// Check the structural invariants `expand` relies on
    pub fn validate(&self) -> Result<()> {
        if self.axes.is_empty() {
            bail!("Axis specification declares no axes");
        }

        let mut names = HashSet::new();
        for axis in &self.axes {
            if !names.insert(axis.name.as_str()) {
                bail!("Axis `{}` is declared more than once", axis.name);
            }
            if axis.values.is_empty() {
                bail!("Axis `{}` has no candidate values", axis.name);
            }

            let mut seen = HashSet::new();
            for value in &axis.values {
                if !seen.insert(value) {
                    bail!("Axis `{}` lists value `{}` more than once", axis.name, value);
                }
            }
        }

        Ok(())
    }
}

/// One chosen value per axis, in declaration order
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Combination {
    values: Vec<(String, AxisValue)>,
}

impl Combination {
    pub fn get(&self, axis: &str) -> Result<&AxisValue> {
        self.values
            .iter()
            .find(|(name, _)| name == axis)
            .map(|(_, value)| value)
            .ok_or_else(|| anyhow!("Combination has no axis `{}`", axis))
    }

    pub fn token(&self, axis: &str) -> Result<&str> {
        match self.get(axis)? {
            AxisValue::Token(token) => Ok(token.as_str()),
            AxisValue::Flag(flag) => bail!("Axis `{}` holds flag `{}`, not a token", axis, flag),
        }
    }

    pub fn flag(&self, axis: &str) -> Result<bool> {
        match self.get(axis)? {
            AxisValue::Flag(flag) => Ok(*flag),
            AxisValue::Token(token) => bail!("Axis `{}` holds token `{}`, not a flag", axis, token),
        }
    }

    /// Parse the token on `axis` into a typed value
    pub fn parse<T>(&self, axis: &str) -> Result<T>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        let token = self.token(axis)?;
        token
            .parse()
            .map_err(|e| anyhow!("Axis `{}` value `{}`: {}", axis, token, e))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AxisValue)> {
        self.values.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (name, value)) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        f.write_str("}")
    }
}

/// Expand `spec` into its full Cartesian product
pub fn expand(spec: &AxisSpec) -> Result<Vec<Combination>> {
    spec.validate()?;

    let axes = spec.axes();
    let mut combinations = Vec::with_capacity(spec.cardinality());
    let mut indices = vec![0usize; axes.len()];

    loop {
        combinations.push(Combination {
            values: axes
                .iter()
                .zip(&indices)
                .map(|(axis, &i)| (axis.name.clone(), axis.values[i].clone()))
                .collect(),
        });

        // Advance the odometer, rightmost wheel first
        let mut pos = axes.len();
        loop {
            if pos == 0 {
                debug!(
                    "Expanded {} axes into {} combinations",
                    axes.len(),
                    combinations.len()
                );
                return Ok(combinations);
            }
            pos -= 1;
            indices[pos] += 1;
            if indices[pos] < axes[pos].values.len() {
                break;
            }
            indices[pos] = 0;
        }
    }
}
