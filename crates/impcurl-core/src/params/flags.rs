//! Flag store and its serializer.

use std::collections::HashMap;
use std::fmt;

/// Value of a single command-line flag.
#[derive(Debug, Clone, PartialEq)]
pub enum FlagValue {
    /// Bare switch with no value (`--name`).
    Absent,
    /// `true` emits a bare switch, `false` emits nothing.
    Bool(bool),
    /// Emitted as a decimal integer.
    Int(i64),
    /// Emitted with exactly four decimal digits.
    Float(f64),
    /// Emitted verbatim as the following argument.
    Str(String),
}

impl FlagValue {
    /// Arguments this value contributes after the flag name is decided.
    /// `None` means the flag is skipped entirely.
    fn value_token(&self) -> Option<Option<String>> {
        match self {
            FlagValue::Absent | FlagValue::Bool(true) => Some(None),
            FlagValue::Bool(false) => None,
            FlagValue::Int(n) => Some(Some(n.to_string())),
            FlagValue::Float(x) => Some(Some(format!("{:.4}", x))),
            FlagValue::Str(s) => Some(Some(s.clone())),
        }
    }
}

impl fmt::Display for FlagValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FlagValue::Absent => Ok(()),
            FlagValue::Bool(b) => write!(f, "{}", b),
            FlagValue::Int(n) => write!(f, "{}", n),
            FlagValue::Float(x) => write!(f, "{:.4}", x),
            FlagValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<bool> for FlagValue {
    fn from(v: bool) -> Self {
        FlagValue::Bool(v)
    }
}

macro_rules! flag_value_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for FlagValue {
                fn from(v: $t) -> Self {
                    FlagValue::Int(i64::from(v))
                }
            }
        )*
    };
}

flag_value_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f32> for FlagValue {
    fn from(v: f32) -> Self {
        FlagValue::Float(f64::from(v))
    }
}

impl From<f64> for FlagValue {
    fn from(v: f64) -> Self {
        FlagValue::Float(v)
    }
}

impl From<&str> for FlagValue {
    fn from(v: &str) -> Self {
        FlagValue::Str(v.to_string())
    }
}

impl From<String> for FlagValue {
    fn from(v: String) -> Self {
        FlagValue::Str(v)
    }
}

impl<T: Into<FlagValue>> From<Option<T>> for FlagValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(FlagValue::Absent)
    }
}

/// Set of curl flags keyed by long option name (without the leading `--`).
///
/// Emission order is unspecified: the store is a plain hash map and callers
/// must not depend on where a flag lands in the generated arguments.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flags {
    m: HashMap<String, FlagValue>,
}

impl Flags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style `set`.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<FlagValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Insert or replace a flag.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<FlagValue>) {
        self.m.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&FlagValue> {
        self.m.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<FlagValue> {
        self.m.remove(name)
    }

    /// Copy every flag of `other` into `self`, replacing existing values.
    pub fn extend(&mut self, other: &Flags) {
        for (k, v) in &other.m {
            self.m.insert(k.clone(), v.clone());
        }
    }

    pub fn len(&self) -> usize {
        self.m.len()
    }

    pub fn is_empty(&self) -> bool {
        self.m.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FlagValue)> {
        self.m.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Serialize into curl arguments: `--name` or `--name value`, never
    /// `--name=value`. `false` flags are omitted.
    pub fn generate(&self) -> Vec<String> {
        let mut result = Vec::with_capacity(self.m.len() * 2);
        for (name, value) in &self.m {
            if let Some(token) = value.value_token() {
                result.push(format!("--{}", name));
                if let Some(token) = token {
                    result.push(token);
                }
            }
        }
        result
    }
}
