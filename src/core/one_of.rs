use crate::domain::model::{FromRaw, Model};
use crate::utils::error::{ModelError, Result};
use serde_json::Value;

/// A resolved union value. Primitive input is passed through untyped:
/// the union is not disambiguated for bare strings, numbers or booleans.
#[derive(Debug, Clone, PartialEq)]
pub enum OneOf<T> {
    Model(T),
    Primitive(Value),
}

/// One member of a union-typed field: its declared name plus a trial
/// decode. A trial that fails for any reason is a non-match, never an
/// error surfaced to the caller.
pub struct Candidate<T> {
    name: &'static str,
    decode: Box<dyn Fn(&Value) -> Result<T> + Send + Sync>,
}

impl<T: 'static> Candidate<T> {
    /// An object-shaped union member. After a successful decode the trial
    /// applies the field-count heuristic: the number of non-null keys in
    /// the raw object must equal the number of non-null fields in the
    /// decoded instance's projection. Sibling schemas in a union often
    /// differ only in which fields are optional; without the count check
    /// an over-permissive candidate would absorb unrelated keys through
    /// its optional fields or silently drop unknown ones.
    pub fn object<M: Model + 'static>(wrap: fn(M) -> T) -> Self {
        Candidate {
            name: M::NAME,
            decode: Box::new(move |raw: &Value| {
                if !raw.is_object() {
                    return Err(ModelError::ValidationError {
                        message: format!("{}: input is not an object", M::NAME),
                    });
                }

                let instance = M::from_raw(raw)?;
                let projected = instance.to_raw();
                if populated_len(raw) != populated_len(&projected) {
                    return Err(ModelError::ValidationError {
                        message: format!(
                            "{}: {} populated fields do not cover {} input keys",
                            M::NAME,
                            populated_len(&projected),
                            populated_len(raw)
                        ),
                    });
                }

                Ok(wrap(instance))
            }),
        }
    }

    /// A sequence-shaped union member ("list of E"). Every element must
    /// decode via the inner type; elements that already have the right
    /// JSON shape are kept as-is by the scalar `FromRaw` impls.
    pub fn list<E: FromRaw + 'static>(name: &'static str, wrap: fn(Vec<E>) -> T) -> Self {
        Candidate {
            name,
            decode: Box::new(move |raw: &Value| {
                let items = raw.as_array().ok_or_else(|| ModelError::ValidationError {
                    message: format!("{}: input is not an array", name),
                })?;

                let decoded = items.iter().map(E::from_raw).collect::<Result<Vec<E>>>()?;
                Ok(wrap(decoded))
            }),
        }
    }
}

/// Resolves raw input against an ordered candidate set. The set is bound
/// per resolver value, so concurrent resolution of different union fields
/// never shares state.
pub struct OneOfResolver<T> {
    candidates: Vec<Candidate<T>>,
}

impl<T> OneOfResolver<T> {
    pub fn new(candidates: Vec<Candidate<T>>) -> Self {
        Self { candidates }
    }

    pub fn candidate_names(&self) -> Vec<&'static str> {
        self.candidates.iter().map(|c| c.name).collect()
    }

    /// Null input resolves to null, primitives pass through untyped, and
    /// the first candidate whose trial succeeds wins in declaration
    /// order. Only total exhaustion is an error; individual trial
    /// failures are logged and swallowed.
    pub fn resolve(&self, raw: &Value) -> Result<Option<OneOf<T>>> {
        if raw.is_null() {
            return Ok(None);
        }

        if raw.is_string() || raw.is_number() || raw.is_boolean() {
            return Ok(Some(OneOf::Primitive(raw.clone())));
        }

        for candidate in &self.candidates {
            match (candidate.decode)(raw) {
                Ok(value) => {
                    tracing::debug!("Resolved one-of input as {}", candidate.name);
                    return Ok(Some(OneOf::Model(value)));
                }
                Err(rejection) => {
                    tracing::debug!("Candidate {} rejected: {}", candidate.name, rejection);
                }
            }
        }

        Err(ModelError::ValidationError {
            message: format!(
                "Input data must match one of the models: {:?}",
                self.candidate_names()
            ),
        })
    }
}

/// Number of non-null keys in a JSON object; zero for any other shape.
fn populated_len(value: &Value) -> usize {
    match value.as_object() {
        Some(map) => map.values().filter(|v| !v.is_null()).count(),
        None => 0,
    }
}
