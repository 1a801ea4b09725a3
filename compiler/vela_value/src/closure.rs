//! Callable values.
//!
//! [`Closure`] is the capability a function value carries. Named functions,
//! lambdas and bound methods are separate implementations of it; the value
//! layer only stores an `Arc<dyn Closure>` and shares it between copies.

use std::fmt;
use std::sync::Arc;

use vela_types::Param;

use crate::value::Value;

/// Something the evaluator can call.
pub trait Closure: Send + Sync + fmt::Debug {
    /// Evaluate against `args` in the caller's environment.
    fn call(&self, args: Vec<Value>) -> Value;

    /// Evaluate without access to any enclosing mutable state.
    fn call_isolated(&self, args: Vec<Value>) -> Value;

    /// Declared parameters, in call order.
    fn params(&self) -> &[Param];

    /// Declared name; `None` for lambdas.
    fn name(&self) -> Option<&str> {
        None
    }
}

/// Host function signature.
pub type NativeFn = fn(&[Value]) -> Value;

/// A function implemented by the host.
///
/// Host functions never see evaluator state, so isolated and regular calls
/// are the same.
pub struct NativeFunction {
    name: Arc<str>,
    params: Box<[Param]>,
    func: NativeFn,
}

impl NativeFunction {
    pub fn new(
        name: impl Into<Arc<str>>,
        params: impl IntoIterator<Item = Param>,
        func: NativeFn,
    ) -> Self {
        NativeFunction {
            name: name.into(),
            params: params.into_iter().collect(),
            func,
        }
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeFunction({})", self.name)
    }
}

impl Closure for NativeFunction {
    fn call(&self, args: Vec<Value>) -> Value {
        (self.func)(&args)
    }

    fn call_isolated(&self, args: Vec<Value>) -> Value {
        (self.func)(&args)
    }

    fn params(&self) -> &[Param] {
        &self.params
    }

    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

/// A method with its receiver already supplied.
///
/// Each call passes a fresh copy of the receiver as the first argument, so
/// calls through the bound method cannot mutate the value it was bound to.
pub struct BoundMethod {
    receiver: Value,
    method: Arc<dyn Closure>,
}

impl BoundMethod {
    pub fn new(receiver: Value, method: Arc<dyn Closure>) -> Self {
        BoundMethod { receiver, method }
    }

    pub fn receiver(&self) -> &Value {
        &self.receiver
    }

    fn with_receiver(&self, args: Vec<Value>) -> Vec<Value> {
        let mut full = Vec::with_capacity(args.len() + 1);
        full.push(self.receiver.copy());
        full.extend(args);
        full
    }
}

impl fmt::Debug for BoundMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundMethod")
            .field("receiver", &self.receiver.type_name())
            .field("method", &self.method)
            .finish()
    }
}

impl Closure for BoundMethod {
    fn call(&self, args: Vec<Value>) -> Value {
        self.method.call(self.with_receiver(args))
    }

    fn call_isolated(&self, args: Vec<Value>) -> Value {
        self.method.call_isolated(self.with_receiver(args))
    }

    /// Parameters left to supply: the method's, minus the receiver.
    fn params(&self) -> &[Param] {
        self.method.params().get(1..).unwrap_or(&[])
    }

    fn name(&self) -> Option<&str> {
        self.method.name()
    }
}
