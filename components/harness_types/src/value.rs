//! JavaScript value model for test assertions.
//!
//! This module provides the `TestValue` enum that represents the JavaScript
//! values a conformance test can assert about, along with the identity
//! handles used for symbols and objects.

use num_bigint::BigInt;
use num_traits::Zero;
use std::fmt;
use std::rc::Rc;

/// A JavaScript symbol, compared by identity only.
///
/// Symbols are never coerced to strings for comparison; two `SymbolRef`
/// handles are equal exactly when they were cloned from the same
/// registration. The optional description is used for diagnostics only.
///
/// # Examples
///
/// ```
/// use harness_types::SymbolRef;
///
/// let a = SymbolRef::new(Some("iterator"));
/// let b = a.clone();
/// let c = SymbolRef::new(Some("iterator"));
///
/// assert_eq!(a, b);
/// assert_ne!(a, c); // same description, different identity
/// ```
#[derive(Clone)]
pub struct SymbolRef {
    inner: Rc<Option<String>>,
}

impl SymbolRef {
    /// Creates a new symbol with an optional description.
    pub fn new(description: Option<&str>) -> Self {
        Self {
            inner: Rc::new(description.map(|d| d.to_string())),
        }
    }

    /// Returns the symbol's description, if any.
    pub fn description(&self) -> Option<&str> {
        self.inner.as_deref()
    }
}

impl PartialEq for SymbolRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for SymbolRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SymbolRef")
            .field(&self.inner.as_deref().unwrap_or(""))
            .finish()
    }
}

/// Display hook for an object: how the object renders itself, which may
/// itself fail (models objects whose `toString`/`valueOf` throws).
type DisplayHook = Box<dyn Fn() -> Result<String, String>>;

struct ObjectData {
    class_name: String,
    callable: bool,
    display: Option<DisplayHook>,
}

/// Handle to a JavaScript object, compared by identity.
///
/// The handle carries the object's class (constructor) name, whether it is
/// callable, and an optional display hook used when rendering diagnostics.
/// Comparison is reference identity, matching strict equality and SameValue
/// semantics for objects.
///
/// # Examples
///
/// ```
/// use harness_types::ObjectRef;
///
/// let a = ObjectRef::new("Object");
/// let b = a.clone();
///
/// assert_eq!(a, b);
/// assert_ne!(a, ObjectRef::new("Object"));
/// assert_eq!(a.class_name(), "Object");
/// ```
#[derive(Clone)]
pub struct ObjectRef {
    inner: Rc<ObjectData>,
}

impl ObjectRef {
    /// Creates a new plain object handle with the given class name.
    pub fn new(class_name: &str) -> Self {
        Self {
            inner: Rc::new(ObjectData {
                class_name: class_name.to_string(),
                callable: false,
                display: None,
            }),
        }
    }

    /// Creates a handle for a callable object (a function).
    pub fn function(name: &str) -> Self {
        Self {
            inner: Rc::new(ObjectData {
                class_name: "Function".to_string(),
                callable: true,
                display: Some(Box::new({
                    let name = name.to_string();
                    move || Ok(format!("function {}() {{ [native code] }}", name))
                })),
            }),
        }
    }

    /// Creates an object handle with a custom display hook.
    ///
    /// The hook runs when the harness renders the object for a diagnostic;
    /// a hook that returns `Err` models an object whose `toString` throws.
    pub fn with_display<F>(class_name: &str, display: F) -> Self
    where
        F: Fn() -> Result<String, String> + 'static,
    {
        Self {
            inner: Rc::new(ObjectData {
                class_name: class_name.to_string(),
                callable: false,
                display: Some(Box::new(display)),
            }),
        }
    }

    /// Returns the object's class (constructor) name.
    pub fn class_name(&self) -> &str {
        &self.inner.class_name
    }

    /// Returns whether the object is callable.
    pub fn is_callable(&self) -> bool {
        self.inner.callable
    }

    /// Runs the display hook, if present.
    ///
    /// Returns `Ok(None)` when no hook is registered (callers fall back to
    /// the default `[object Class]` rendering), `Err` when the hook failed.
    pub fn try_display(&self) -> Result<Option<String>, String> {
        match &self.inner.display {
            Some(hook) => hook().map(Some),
            None => Ok(None),
        }
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ObjectRef")
            .field(&self.inner.class_name)
            .finish()
    }
}

/// Represents any JavaScript value a test can assert about.
///
/// This enum uses a tagged representation. Primitive values are stored
/// inline; symbols and objects are identity handles so that strict-equality
/// and SameValue comparison match reference semantics.
///
/// # Examples
///
/// ```
/// use harness_types::TestValue;
///
/// let undefined = TestValue::Undefined;
/// let number = TestValue::Int(42);
/// let float = TestValue::Double(3.14);
///
/// assert!(!undefined.is_truthy());
/// assert!(number.is_truthy());
/// assert_eq!(number.type_of(), "number");
/// assert!(float.same_value(&TestValue::Double(3.14)));
/// ```
#[derive(Clone)]
pub enum TestValue {
    /// JavaScript undefined value
    Undefined,
    /// JavaScript null value
    Null,
    /// JavaScript boolean (true or false)
    Boolean(bool),
    /// Small integer (fits in 32 bits)
    Int(i32),
    /// IEEE 754 double-precision floating point
    Double(f64),
    /// JavaScript string value
    String(String),
    /// JavaScript symbol, compared by identity
    Symbol(SymbolRef),
    /// Object or function, compared by identity
    Object(ObjectRef),
    /// JavaScript BigInt (arbitrary precision integer)
    BigInt(BigInt),
}

impl fmt::Debug for TestValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestValue::Undefined => write!(f, "Undefined"),
            TestValue::Null => write!(f, "Null"),
            TestValue::Boolean(b) => f.debug_tuple("Boolean").field(b).finish(),
            TestValue::Int(n) => f.debug_tuple("Int").field(n).finish(),
            TestValue::Double(n) => f.debug_tuple("Double").field(n).finish(),
            TestValue::String(s) => f.debug_tuple("String").field(s).finish(),
            TestValue::Symbol(s) => s.fmt(f),
            TestValue::Object(o) => o.fmt(f),
            TestValue::BigInt(n) => f.debug_tuple("BigInt").field(n).finish(),
        }
    }
}

impl PartialEq for TestValue {
    /// Strict-equality-like semantics: `NaN != NaN`, `0 == -0`, objects and
    /// symbols by identity. Use [`TestValue::same_value`] for the SameValue
    /// semantics test assertions rely on.
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (TestValue::Undefined, TestValue::Undefined) => true,
            (TestValue::Null, TestValue::Null) => true,
            (TestValue::Boolean(a), TestValue::Boolean(b)) => a == b,
            (TestValue::String(a), TestValue::String(b)) => a == b,
            (TestValue::Symbol(a), TestValue::Symbol(b)) => a == b,
            (TestValue::Object(a), TestValue::Object(b)) => a == b,
            (TestValue::BigInt(a), TestValue::BigInt(b)) => a == b,
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
        }
    }
}

impl TestValue {
    /// Returns the numeric view of this value, if it is a number.
    ///
    /// `Int` and `Double` are one JavaScript "number" type; comparisons must
    /// not distinguish `Int(1)` from `Double(1.0)`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            TestValue::Int(n) => Some(f64::from(*n)),
            TestValue::Double(n) => Some(*n),
            _ => None,
        }
    }

    /// Compares two values with ECMAScript SameValue semantics.
    ///
    /// Differences from strict equality:
    /// - `NaN` is SameValue to `NaN`
    /// - `+0` and `-0` are distinct
    ///
    /// Everything else matches strict equality: reference identity for
    /// objects and symbols, value equality for the remaining primitives.
    ///
    /// # Examples
    ///
    /// ```
    /// use harness_types::TestValue;
    ///
    /// assert!(TestValue::Double(f64::NAN).same_value(&TestValue::Double(f64::NAN)));
    /// assert!(!TestValue::Int(0).same_value(&TestValue::Double(-0.0)));
    /// assert!(TestValue::Int(7).same_value(&TestValue::Double(7.0)));
    /// ```
    pub fn same_value(&self, other: &Self) -> bool {
        if let (Some(a), Some(b)) = (self.as_number(), other.as_number()) {
            if a.is_nan() && b.is_nan() {
                return true;
            }
            // Bit comparison distinguishes +0 from -0.
            return a.to_bits() == b.to_bits();
        }
        self == other
    }

    /// Returns whether this value is truthy in JavaScript semantics.
    ///
    /// Falsy values: undefined, null, false, 0 (including -0), NaN, the
    /// empty string, and 0n. All other values are truthy, including all
    /// objects.
    pub fn is_truthy(&self) -> bool {
        match self {
            TestValue::Undefined => false,
            TestValue::Null => false,
            TestValue::Boolean(b) => *b,
            TestValue::Int(n) => *n != 0,
            TestValue::Double(n) => !n.is_nan() && *n != 0.0,
            TestValue::String(s) => !s.is_empty(),
            TestValue::Symbol(_) => true,
            TestValue::Object(_) => true,
            TestValue::BigInt(n) => !n.is_zero(),
        }
    }

    /// Returns the JavaScript `typeof` result for this value.
    ///
    /// `null` reports `"object"`, the historical quirk, and callable
    /// objects report `"function"`.
    pub fn type_of(&self) -> &'static str {
        match self {
            TestValue::Undefined => "undefined",
            TestValue::Null => "object", // JavaScript quirk
            TestValue::Boolean(_) => "boolean",
            TestValue::Int(_) => "number",
            TestValue::Double(_) => "number",
            TestValue::String(_) => "string",
            TestValue::Symbol(_) => "symbol",
            TestValue::Object(o) => {
                if o.is_callable() {
                    "function"
                } else {
                    "object"
                }
            }
            TestValue::BigInt(_) => "bigint",
        }
    }

    /// Returns the class (constructor) name of this value, if it has one.
    ///
    /// Objects report their registered class name; primitives report their
    /// wrapper constructor. `undefined` and `null` have no class.
    pub fn class_name(&self) -> Option<&str> {
        match self {
            TestValue::Undefined | TestValue::Null => None,
            TestValue::Boolean(_) => Some("Boolean"),
            TestValue::Int(_) | TestValue::Double(_) => Some("Number"),
            TestValue::String(_) => Some("String"),
            TestValue::Symbol(_) => Some("Symbol"),
            TestValue::Object(o) => Some(o.class_name()),
            TestValue::BigInt(_) => Some("BigInt"),
        }
    }

    /// Renders this value with JavaScript `String()` conversion rules,
    /// surfacing display-hook failure instead of panicking.
    ///
    /// For objects with a display hook the hook's failure is returned as
    /// `Err`; everything else is infallible and matches [`fmt::Display`].
    pub fn try_display(&self) -> Result<String, String> {
        if let TestValue::Object(o) = self {
            if let Some(rendered) = o.try_display()? {
                return Ok(rendered);
            }
        }
        Ok(self.to_string())
    }
}

/// Implementation of Display for JavaScript string conversion.
///
/// Follows JavaScript's `String()` rules: `NaN`, signed `Infinity`,
/// integer-valued doubles without a decimal point, `[object Class]` for
/// objects without a display hook, `Symbol(description)` for symbols. A
/// failing display hook degrades to the `[object Class]` form here; use
/// [`TestValue::try_display`] to observe the failure.
impl fmt::Display for TestValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestValue::Undefined => write!(f, "undefined"),
            TestValue::Null => write!(f, "null"),
            TestValue::Boolean(b) => write!(f, "{}", if *b { "true" } else { "false" }),
            TestValue::Int(n) => write!(f, "{}", n),
            TestValue::Double(n) => {
                if n.is_nan() {
                    write!(f, "NaN")
                } else if n.is_infinite() {
                    if n.is_sign_positive() {
                        write!(f, "Infinity")
                    } else {
                        write!(f, "-Infinity")
                    }
                } else if n.fract() == 0.0 && n.abs() < 1e15 {
                    // Integer-valued doubles display without decimal point
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            TestValue::String(s) => write!(f, "{}", s),
            TestValue::Symbol(s) => {
                write!(f, "Symbol({})", s.description().unwrap_or(""))
            }
            TestValue::Object(o) => match o.try_display() {
                Ok(Some(rendered)) => write!(f, "{}", rendered),
                _ => write!(f, "[object {}]", o.class_name()),
            },
            TestValue::BigInt(n) => write!(f, "{}n", n),
        }
    }
}

impl From<bool> for TestValue {
    fn from(b: bool) -> Self {
        TestValue::Boolean(b)
    }
}

impl From<i32> for TestValue {
    fn from(n: i32) -> Self {
        TestValue::Int(n)
    }
}

impl From<f64> for TestValue {
    fn from(n: f64) -> Self {
        TestValue::Double(n)
    }
}

impl From<&str> for TestValue {
    fn from(s: &str) -> Self {
        TestValue::String(s.to_string())
    }
}
