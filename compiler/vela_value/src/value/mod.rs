//! Runtime values for the Vela evaluator.
//!
//! Every value is a payload plus the `Type` it was created with, the `Kind`
//! derived from that type, the type's rendered name, and three independent
//! variant flags:
//!
//! - `OK` / `ERR`: the value is a narrowed `Result` arm. A narrowed value is
//!   *not* a two-armed union: its type is the arm's component type, and so
//!   is its kind. `Kind::Result` only shows up on values that have not been
//!   narrowed yet.
//! - `NONE`: the value is an empty `Maybe`. Only set when the kind is
//!   `Maybe`.
//!
//! # Construction
//!
//! All values are built through the factory methods in this module:
//!
//! ```text
//! let n = Value::int(42);
//! let xs = Value::list(types.list(Type::int()), vec![Value::int(1)]);
//! let none = Value::make_none(&types, Type::str());
//! let ok = Value::make_ok_in(Value::int(1), types.result(Type::int(), Type::str()));
//! ```
//!
//! Containers record the *declared* type they were built with. Items may
//! carry a more specific or a still-generic type of their own; checking that
//! they fit is the type checker's job, not this layer's.
//!
//! # Ownership
//!
//! Collections own their children exclusively and all mutation is in place
//! through `&mut Value`. Before handing a value to a second owner, the
//! evaluator duplicates it with [`Value::copy`].

mod display;

use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

use bitflags::bitflags;
use vela_types::{ResultBranch, Type, TypeInterner};

use crate::closure::Closure;
use crate::errors::consistency_fault;
use crate::kind::Kind;
use crate::map_key;
use crate::plain::PlainData;

bitflags! {
    /// Narrowing state of a value. The three flags are independent.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct VariantFlags: u8 {
        /// Narrowed `Ok` arm of a result.
        const OK = 1 << 0;
        /// Narrowed `Err` arm of a result.
        const ERR = 1 << 1;
        /// Empty maybe.
        const NONE = 1 << 2;
    }
}

/// Raw contents of a value.
///
/// The shape follows the kind (`Kind::List` holds `List`, structs and maps
/// hold `Map`, enums hold their discriminant as `Int`, ...). A `Some` maybe
/// holds its element's payload directly. `Dynamic` holds an untyped tree
/// that is never checked against a declared element type.
#[derive(Debug)]
pub enum Payload {
    Absent,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(Arc<str>),
    List(Vec<Value>),
    /// Canonical key encoding (see [`crate::map_key`]) or struct field name
    /// to child value.
    Map(BTreeMap<String, Value>),
    Function(Arc<dyn Closure>),
    Dynamic(PlainData),
}

impl Payload {
    /// Short shape name for fault messages.
    pub(crate) fn shape(&self) -> &'static str {
        match self {
            Payload::Absent => "absent",
            Payload::Bool(_) => "bool",
            Payload::Int(_) => "int",
            Payload::Float(_) => "float",
            Payload::Str(_) => "str",
            Payload::List(_) => "list",
            Payload::Map(_) => "map",
            Payload::Function(_) => "function",
            Payload::Dynamic(_) => "dynamic",
        }
    }
}

/// A runtime value.
pub struct Value {
    pub(crate) payload: Payload,
    ty: Type,
    kind: Kind,
    name: Arc<str>,
    pub(crate) flags: VariantFlags,
    /// The `Result` type a narrowed arm came from, when the constructor knew
    /// it. Refinement uses it to resolve the arm's component type.
    pub(crate) origin: Option<Type>,
}

static VOID: LazyLock<Value> = LazyLock::new(|| Value::with_type(Type::void(), Payload::Absent));

// Factory Methods

impl Value {
    /// Assemble a value, deriving kind and name from `ty`.
    pub(crate) fn with_type(ty: Type, payload: Payload) -> Self {
        Value {
            payload,
            kind: Kind::for_type(&ty),
            name: ty.name_arc(),
            ty,
            flags: VariantFlags::empty(),
            origin: None,
        }
    }

    /// Replace the recorded type, re-deriving kind and name with it.
    pub(crate) fn retype(&mut self, ty: Type) {
        self.kind = Kind::for_type(&ty);
        self.name = ty.name_arc();
        self.ty = ty;
    }

    /// Value with an arbitrary recorded type, e.g. the still-open `$T` or
    /// `T!E` return type of a generic call.
    ///
    /// The payload shape is not checked against `ty`; it must be the shape
    /// the kind of `ty` (or, for an open type, of the eventual concrete
    /// type) expects.
    pub fn typed(ty: Type, payload: Payload) -> Self {
        Value::with_type(ty, payload)
    }

    /// Fault unless `ty` has the kind a constructor requires.
    #[track_caller]
    fn require(ty: &Type, kind: Kind) {
        if Kind::for_type(ty) != kind {
            consistency_fault(kind.name(), ty);
        }
    }

    /// The shared void value.
    ///
    /// Built once per process. It is never mutated and never carries variant
    /// flags.
    pub fn void() -> &'static Value {
        &VOID
    }

    pub fn str(s: impl Into<Arc<str>>) -> Self {
        Value::with_type(Type::str(), Payload::Str(s.into()))
    }

    pub fn int(n: i64) -> Self {
        Value::with_type(Type::int(), Payload::Int(n))
    }

    pub fn float(f: f64) -> Self {
        Value::with_type(Type::float(), Payload::Float(f))
    }

    pub fn bool(b: bool) -> Self {
        Value::with_type(Type::bool(), Payload::Bool(b))
    }

    /// List with declared type `list_ty` (`[T]`).
    #[track_caller]
    pub fn list(list_ty: Type, items: Vec<Value>) -> Self {
        Value::require(&list_ty, Kind::List);
        Value::with_type(list_ty, Payload::List(items))
    }

    /// Empty map with declared type `map_ty` (`[K:V]`).
    #[track_caller]
    pub fn map(map_ty: Type) -> Self {
        Value::require(&map_ty, Kind::Map);
        Value::with_type(map_ty, Payload::Map(BTreeMap::new()))
    }

    /// Map with declared type `map_ty`, filled from `(key, value)` pairs.
    #[track_caller]
    pub fn map_from(map_ty: Type, entries: impl IntoIterator<Item = (Value, Value)>) -> Self {
        let mut map = Value::map(map_ty);
        for (key, value) in entries {
            map.insert(&key, value);
        }
        map
    }

    /// Struct instance. Field completeness is checked upstream.
    #[track_caller]
    pub fn structure<N: Into<String>>(
        struct_ty: Type,
        fields: impl IntoIterator<Item = (N, Value)>,
    ) -> Self {
        Value::require(&struct_ty, Kind::Struct);
        let fields = fields
            .into_iter()
            .map(|(name, value)| (name.into(), value))
            .collect();
        Value::with_type(struct_ty, Payload::Map(fields))
    }

    /// Enum member identified by its discriminant.
    #[track_caller]
    pub fn enum_member(enum_ty: Type, discriminant: i64) -> Self {
        Value::require(&enum_ty, Kind::Enum);
        Value::with_type(enum_ty, Payload::Int(discriminant))
    }

    /// Callable value. `fn_ty` is the declared signature.
    #[track_caller]
    pub fn function(fn_ty: Type, closure: Arc<dyn Closure>) -> Self {
        Value::require(&fn_ty, Kind::Function);
        Value::with_type(fn_ty, Payload::Function(closure))
    }

    /// Untyped host data.
    pub fn dynamic(data: PlainData) -> Self {
        Value::with_type(Type::dynamic(), Payload::Dynamic(data))
    }

    /// Empty maybe of `elem?`.
    pub fn make_none(types: &TypeInterner, elem: Type) -> Self {
        Value::none_of(types.maybe(elem))
    }

    /// Empty maybe with an already-built maybe type.
    #[track_caller]
    pub fn none_of(maybe_ty: Type) -> Self {
        Value::require(&maybe_ty, Kind::Maybe);
        let mut value = Value::with_type(maybe_ty, Payload::Absent);
        value.flags.insert(VariantFlags::NONE);
        value
    }

    /// Filled maybe of `value`'s type, holding `value`'s payload.
    pub fn make_some(types: &TypeInterner, value: Value) -> Self {
        let maybe_ty = types.maybe(value.ty.clone());
        Value::with_type(maybe_ty, value.payload)
    }

    /// Sibling of this maybe holding `value`'s payload, same maybe type.
    #[track_caller]
    pub fn to_some(&self, value: Value) -> Value {
        Value::require(&self.ty, Kind::Maybe);
        Value::with_type(self.ty.clone(), value.payload)
    }

    /// Empty sibling of this maybe, same maybe type.
    #[track_caller]
    pub fn to_none(&self) -> Value {
        Value::none_of(self.ty.clone())
    }

    /// Tag an already-unwrapped value as the `Ok` arm.
    ///
    /// The `Result` type it came from is not recorded, so refinement cannot
    /// resolve the arm's component type later. Prefer [`Value::make_ok_in`].
    pub fn make_ok(value: Value) -> Self {
        value.narrowed(ResultBranch::Ok, None)
    }

    /// Tag an already-unwrapped value as the `Err` arm. See [`Value::make_ok`].
    pub fn make_err(value: Value) -> Self {
        value.narrowed(ResultBranch::Err, None)
    }

    /// Tag `value` as the `Ok` arm of `result_ty`, keeping `result_ty`.
    #[track_caller]
    pub fn make_ok_in(value: Value, result_ty: Type) -> Self {
        Value::require(&result_ty, Kind::Result);
        value.narrowed(ResultBranch::Ok, Some(result_ty))
    }

    /// Tag `value` as the `Err` arm of `result_ty`, keeping `result_ty`.
    #[track_caller]
    pub fn make_err_in(value: Value, result_ty: Type) -> Self {
        Value::require(&result_ty, Kind::Result);
        value.narrowed(ResultBranch::Err, Some(result_ty))
    }

    fn narrowed(mut self, branch: ResultBranch, origin: Option<Type>) -> Self {
        let (set, clear) = match branch {
            ResultBranch::Ok => (VariantFlags::OK, VariantFlags::ERR),
            ResultBranch::Err => (VariantFlags::ERR, VariantFlags::OK),
        };
        self.flags.remove(clear);
        self.flags.insert(set);
        self.origin = origin;
        self
    }
}

// Probes

impl Value {
    #[inline]
    pub fn ty(&self) -> &Type {
        &self.ty
    }

    #[inline]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Cached rendered name of the recorded type.
    #[inline]
    pub fn type_name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn flags(&self) -> VariantFlags {
        self.flags
    }

    #[inline]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    #[inline]
    pub fn is_ok(&self) -> bool {
        self.flags.contains(VariantFlags::OK)
    }

    #[inline]
    pub fn is_err(&self) -> bool {
        self.flags.contains(VariantFlags::ERR)
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.flags.contains(VariantFlags::NONE)
    }

    #[inline]
    pub fn is_void(&self) -> bool {
        self.kind == Kind::Void
    }

    /// The result arm this value was narrowed to, if any.
    pub fn branch(&self) -> Option<ResultBranch> {
        if self.is_ok() {
            Some(ResultBranch::Ok)
        } else if self.is_err() {
            Some(ResultBranch::Err)
        } else {
            None
        }
    }

    /// The `Result` type a narrowed arm was created from, if it was kept.
    pub fn result_origin(&self) -> Option<&Type> {
        self.origin.as_ref()
    }

    /// Member name of an enum value.
    pub fn variant_name(&self) -> Option<&str> {
        match self.payload {
            Payload::Int(d) if self.kind == Kind::Enum => self.ty.variant_name(d),
            _ => None,
        }
    }
}

// Narrowing accessors. Callers probe kind and flags first; a mismatch here
// is an internal-consistency fault.

impl Value {
    #[track_caller]
    fn mismatch(&self, expected: &str) -> ! {
        consistency_fault(
            &format!("{expected} payload (found {} payload)", self.payload.shape()),
            &self.ty,
        )
    }

    #[track_caller]
    pub fn as_bool(&self) -> bool {
        match self.payload {
            Payload::Bool(b) => b,
            _ => self.mismatch("bool"),
        }
    }

    #[track_caller]
    pub fn as_int(&self) -> i64 {
        match self.payload {
            Payload::Int(n) if self.kind != Kind::Enum => n,
            _ => self.mismatch("int"),
        }
    }

    #[track_caller]
    pub fn as_float(&self) -> f64 {
        match self.payload {
            Payload::Float(f) => f,
            _ => self.mismatch("float"),
        }
    }

    #[track_caller]
    pub fn as_str(&self) -> &str {
        match &self.payload {
            Payload::Str(s) => s,
            _ => self.mismatch("str"),
        }
    }

    /// Discriminant of an enum member.
    #[track_caller]
    pub fn discriminant(&self) -> i64 {
        match self.payload {
            Payload::Int(d) if self.kind == Kind::Enum => d,
            _ => self.mismatch("enum"),
        }
    }

    #[track_caller]
    pub fn as_list(&self) -> &[Value] {
        match &self.payload {
            Payload::List(items) => items,
            _ => self.mismatch("list"),
        }
    }

    #[track_caller]
    pub fn as_list_mut(&mut self) -> &mut Vec<Value> {
        match &mut self.payload {
            Payload::List(items) => items,
            other => consistency_fault(
                &format!("list payload (found {} payload)", other.shape()),
                &self.ty,
            ),
        }
    }

    /// Raw entries of a map or struct, keyed by canonical key or field name.
    #[track_caller]
    pub fn as_map(&self) -> &BTreeMap<String, Value> {
        match &self.payload {
            Payload::Map(entries) => entries,
            _ => self.mismatch("map"),
        }
    }

    #[track_caller]
    fn as_map_mut(&mut self) -> &mut BTreeMap<String, Value> {
        match &mut self.payload {
            Payload::Map(entries) => entries,
            other => consistency_fault(
                &format!("map payload (found {} payload)", other.shape()),
                &self.ty,
            ),
        }
    }

    #[track_caller]
    pub fn as_function(&self) -> &Arc<dyn Closure> {
        match &self.payload {
            Payload::Function(closure) => closure,
            _ => self.mismatch("function"),
        }
    }

    #[track_caller]
    pub fn as_dynamic(&self) -> &PlainData {
        match &self.payload {
            Payload::Dynamic(data) => data,
            _ => self.mismatch("dynamic"),
        }
    }

    /// Materialize the element of a filled maybe as a value of the element
    /// type.
    #[track_caller]
    pub fn unwrap_some(&self) -> Value {
        let Some(inner) = self.ty.inner() else {
            consistency_fault("maybe", &self.ty);
        };
        if self.is_none() {
            consistency_fault("filled maybe (found None)", &self.ty);
        }
        Value::with_type(inner.clone(), self.payload_copy())
    }
}

// Lists

impl Value {
    #[track_caller]
    pub fn push(&mut self, item: Value) {
        self.as_list_mut().push(item);
    }

    /// Number of elements in a list, entries in a map, or fields in a struct.
    #[track_caller]
    pub fn len(&self) -> usize {
        match &self.payload {
            Payload::List(items) => items.len(),
            Payload::Map(entries) => entries.len(),
            _ => self.mismatch("collection"),
        }
    }

    #[track_caller]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[track_caller]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.as_list().get(index)
    }
}

// Maps

impl Value {
    #[track_caller]
    fn key_type(&self) -> &Type {
        match self.ty.key() {
            Some(key) => key,
            None => consistency_fault("map", &self.ty),
        }
    }

    /// Insert or replace the entry for `key`.
    #[track_caller]
    pub fn insert(&mut self, key: &Value, value: Value) -> Option<Value> {
        let encoded = map_key::encode_key(key, self.key_type());
        self.as_map_mut().insert(encoded, value)
    }

    #[track_caller]
    pub fn lookup(&self, key: &Value) -> Option<&Value> {
        let encoded = map_key::encode_key(key, self.key_type());
        self.as_map().get(&encoded)
    }

    #[track_caller]
    pub fn lookup_mut(&mut self, key: &Value) -> Option<&mut Value> {
        let encoded = map_key::encode_key(key, self.key_type());
        self.as_map_mut().get_mut(&encoded)
    }

    #[track_caller]
    pub fn remove(&mut self, key: &Value) -> Option<Value> {
        let encoded = map_key::encode_key(key, self.key_type());
        self.as_map_mut().remove(&encoded)
    }

    #[track_caller]
    pub fn contains_key(&self, key: &Value) -> bool {
        self.lookup(key).is_some()
    }

    /// Entries with keys decoded back to values, in canonical key order.
    #[track_caller]
    pub fn entries(&self) -> impl Iterator<Item = (Value, &Value)> + '_ {
        let key_ty = self.key_type().clone();
        self.as_map()
            .iter()
            .map(move |(encoded, value)| (map_key::decode_key(encoded, &key_ty), value))
    }
}

// Structs

impl Value {
    /// Field of a struct; `None` for a field the struct does not have.
    #[track_caller]
    pub fn field(&self, name: &str) -> Option<&Value> {
        if self.kind != Kind::Struct {
            consistency_fault("struct", &self.ty);
        }
        self.as_map().get(name)
    }

    #[track_caller]
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Value> {
        if self.kind != Kind::Struct {
            consistency_fault("struct", &self.ty);
        }
        self.as_map_mut().get_mut(name)
    }

    /// Overwrite a field, returning the previous value.
    #[track_caller]
    pub fn set_field(&mut self, name: &str, value: Value) -> Option<Value> {
        if self.kind != Kind::Struct {
            consistency_fault("struct", &self.ty);
        }
        self.as_map_mut().insert(name.to_owned(), value)
    }

    /// Field names in the struct's declaration order.
    pub fn field_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.ty.fields().iter().map(|(name, _)| &**name)
    }
}
