use crate::api::capture::*;

/// A sink holding a single value (precisely 1 token).
///
/// When `T` is a switch type (ex: `bool`), the sink also accepts 0 tokens, meaning "activate".
pub struct Scalar<'a, T> {
    variable: &'a mut T,
}

impl<'a, T> Scalar<'a, T> {
    /// Create a scalar sink.
    pub fn new(variable: &'a mut T) -> Self {
        Self { variable }
    }
}

impl<'a, T> Sink<T> for Scalar<'a, T>
where
    T: FromToken,
{
    fn set(&mut self, tokens: &[&str]) -> Result<(), ConversionError> {
        let value = match tokens {
            [] => T::activated().ok_or(ConversionError::Count {
                received: 0,
                type_name: std::any::type_name::<T>(),
            })?,
            [token] => T::from_token(token)?,
            _ => {
                return Err(ConversionError::Count {
                    received: tokens.len(),
                    type_name: std::any::type_name::<T>(),
                })
            }
        };
        *self.variable = value;
        Ok(())
    }

    fn get(&self) -> &T {
        self.variable
    }

    fn describe(&self) -> String {
        self.variable.to_string()
    }

    fn is_switch(&self) -> bool {
        T::SWITCH
    }
}

/// A sink holding multiple values.
///
/// Each `set` replaces the entire list, and only once every token has converted.
pub struct List<'a, T> {
    variable: &'a mut Vec<T>,
}

impl<'a, T> List<'a, T> {
    /// Create a list sink.
    pub fn new(variable: &'a mut Vec<T>) -> Self {
        Self { variable }
    }
}

impl<'a, T> Sink<Vec<T>> for List<'a, T>
where
    T: FromToken,
{
    fn set(&mut self, tokens: &[&str]) -> Result<(), ConversionError> {
        let values = tokens
            .iter()
            .map(|token| T::from_token(token))
            .collect::<Result<Vec<T>, _>>()?;
        *self.variable = values;
        Ok(())
    }

    fn get(&self) -> &Vec<T> {
        self.variable
    }

    fn describe(&self) -> String {
        format!(
            "[{}]",
            self.variable
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<String>>()
                .join(" ")
        )
    }
}
