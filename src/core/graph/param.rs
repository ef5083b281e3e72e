use super::link::Link;
use super::module::Module;
use super::port::Port;
use super::scope::Scope;
use crate::core::errors::Result;
use log::trace;

/// Parameter value as written to the script
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Renders as `""`
    Absent,
    /// Renders quoted
    Scalar(String),
    /// Renders as space-separated quoted items, nested sequences flattened
    Sequence(Vec<ParamValue>),
}

impl ParamValue {
    pub fn render(&self) -> String {
        match self {
            ParamValue::Absent => "\"\"".to_string(),
            ParamValue::Scalar(value) => format!("\"{}\"", value),
            ParamValue::Sequence(items) => items
                .iter()
                .map(ParamValue::render)
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Scalar(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Scalar(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Scalar(value.clone())
    }
}

macro_rules! scalar_from_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::Scalar(value.to_string())
                }
            }
        )*
    };
}

scalar_from_display!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

// Debug keeps the fractional part, so `1.0` stays `1.0`
macro_rules! scalar_from_float {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for ParamValue {
                fn from(value: $ty) -> Self {
                    ParamValue::Scalar(format!("{:?}", value))
                }
            }
        )*
    };
}

scalar_from_float!(f32, f64);

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        let text = if value { "True" } else { "False" };
        ParamValue::Scalar(text.to_string())
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Absent, Into::into)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(values: Vec<T>) -> Self {
        ParamValue::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ParamValue>, const N: usize> From<[T; N]> for ParamValue {
    fn from(values: [T; N]) -> Self {
        ParamValue::Sequence(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<ParamValue> + Clone> From<&[T]> for ParamValue {
    fn from(values: &[T]) -> Self {
        ParamValue::Sequence(values.iter().cloned().map(Into::into).collect())
    }
}

/// What a parameter is attached to
#[derive(Debug, Clone)]
pub enum ParamTarget {
    Module(Module),
    /// The link at this port
    Port(Port),
    /// The link's destination port
    Link(Link),
}

/// A parameter assignment, written once when created
#[derive(Debug, Clone)]
pub struct Parameter {
    target: ParamTarget,
    name: String,
    value: ParamValue,
}

impl Parameter {
    pub(crate) fn new(target: ParamTarget, name: &str, value: ParamValue) -> Result<Self> {
        let parameter = Self {
            target,
            name: name.to_string(),
            value,
        };
        let command = parameter.command()?;
        parameter.module().script().emit(&command)?;
        Ok(parameter)
    }

    pub fn target(&self) -> &ParamTarget {
        &self.target
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn value(&self) -> &ParamValue {
        &self.value
    }

    fn module(&self) -> &Module {
        match &self.target {
            ParamTarget::Module(module) => module,
            ParamTarget::Port(port) => port.module(),
            ParamTarget::Link(link) => link.dst().module(),
        }
    }

    /// The `SetModuleParam` or `SetLinkParam` command for this assignment
    pub fn command(&self) -> Result<String> {
        let name = ParamValue::from(self.name.as_str()).render();
        let value = self.value.render();

        let port = match &self.target {
            ParamTarget::Module(module) => {
                return Ok(format!("SetModuleParam \"{}\" {} {}", module.path(), name, value));
            }
            ParamTarget::Port(port) => port,
            ParamTarget::Link(link) => {
                trace!("Link parameter '{}' goes to destination port", self.name);
                link.dst()
            }
        };

        Ok(format!(
            "SetLinkParam \"{}\" \"{}\" {} {}",
            port.module().path(),
            port.identifier()?,
            name,
            value
        ))
    }
}
