//! Deferred computations built from a target and a schema

use crate::error::{InvokeError, RegistrationError, ResolveError};
use crate::resolve::ParamResolver;
use crate::schema::{Args, Schema, SchemaArg};
use crate::value::{Value, ValueType};
use std::fmt;
use std::rc::Rc;

/// A callable the router can dispatch to once its arguments are resolved.
///
/// A target declares the positional types it expects, which lets the router
/// validate a schema against it when the entry is registered. Invocation
/// then hands the target a fully resolved [`Args`] list whose length and
/// per-position types are already known to agree with the signature.
pub struct Target<R> {
    signature: Vec<ValueType>,
    apply: Box<dyn Fn(Args) -> Result<R, InvokeError>>,
}

impl<R> Target<R> {
    /// Create a target from its signature and application function
    pub fn new(
        signature: Vec<ValueType>,
        apply: impl Fn(Args) -> Result<R, InvokeError> + 'static,
    ) -> Self {
        Self {
            signature,
            apply: Box::new(apply),
        }
    }

    /// Create a target that takes no arguments
    pub fn nullary(apply: impl Fn() -> Result<R, InvokeError> + 'static) -> Self {
        Self::new(Vec::new(), move |_| apply())
    }

    /// Positional argument types this target expects
    pub fn signature(&self) -> &[ValueType] {
        &self.signature
    }

    fn apply(&self, args: Args) -> Result<R, InvokeError> {
        (self.apply)(args)
    }
}

/// A zero-argument deferred computation.
///
/// Invoking it resolves every unbound schema parameter (in schema order,
/// through the resolver captured at registration) and applies the target to
/// the resulting argument list. Handles are cheap to clone and remain
/// independently invokable after the router that produced them is dropped;
/// the captured resolver is kept alive by the handles that share it.
pub struct Deferred<R> {
    run: Rc<dyn Fn() -> Result<R, InvokeError>>,
}

impl<R> Clone for Deferred<R> {
    fn clone(&self) -> Self {
        Self {
            run: Rc::clone(&self.run),
        }
    }
}

impl<R> Deferred<R> {
    /// Resolve all parameters and apply the target
    pub fn invoke(&self) -> Result<R, InvokeError> {
        (self.run)()
    }
}

impl<R> fmt::Debug for Deferred<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deferred").finish_non_exhaustive()
    }
}

/// Check a schema against a target signature.
///
/// Any disagreement in arity or per-position type is a registration-time
/// failure; invocation never re-checks.
pub(crate) fn check_schema<R>(target: &Target<R>, schema: &Schema) -> Result<(), RegistrationError> {
    let signature = target.signature();
    if schema.len() != signature.len() {
        return Err(RegistrationError::ArityMismatch {
            expected: signature.len(),
            found: schema.len(),
        });
    }

    for (position, (declared, expected)) in schema.arg_types().zip(signature).enumerate() {
        if declared != *expected {
            return Err(RegistrationError::TypeMismatch {
                position,
                expected: *expected,
                found: declared,
            });
        }
    }

    Ok(())
}

/// Build the deferred computation for a registered entry.
pub(crate) fn build_deferred<R: 'static>(
    target: Target<R>,
    schema: Schema,
    resolver: Rc<dyn ParamResolver>,
) -> Deferred<R> {
    if schema.is_empty() {
        // A nullary entry is just the target; no resolution step and no
        // resolver capture.
        return Deferred {
            run: Rc::new(move || target.apply(Args::new(Vec::new()))),
        };
    }

    let run = move || {
        let mut values = Vec::with_capacity(schema.len());
        for arg in schema.args() {
            values.push(resolve_arg(arg, resolver.as_ref())?);
        }
        target.apply(Args::new(values))
    };

    Deferred { run: Rc::new(run) }
}

fn resolve_arg(arg: &SchemaArg, resolver: &dyn ParamResolver) -> Result<Value, InvokeError> {
    match arg {
        SchemaArg::Bind(value) => Ok(value.clone()),
        SchemaArg::Param { name, ty } => {
            let value = resolver.resolve(name, *ty)?;
            if value.value_type() != *ty {
                return Err(ResolveError::TypeMismatch {
                    name: name.clone(),
                    expected: *ty,
                    found: value.value_type(),
                }
                .into());
            }
            Ok(value)
        }
    }
}
