//! The `is` namespace: every predicate bound to one realm.

use builtins::Realm;
use core_types::Value;

use crate::classify::{classify, Tag};
use crate::is;
use crate::options::IsOptions;

/// A predicate looked up by name.
pub type PredicateFn = fn(&Is<'_>, &Value) -> bool;

/// The predicates of a realm, under their JavaScript names.
///
/// # Examples
///
/// ```
/// use builtins::Realm;
/// use core_types::Value;
/// use type_predicates::Is;
///
/// let realm = Realm::new();
/// let is = Is::new(&realm);
///
/// assert!(is.nil(&Value::Undefined));
/// assert!(is.object(&Value::Object(realm.new_date(0.0))));
/// assert_eq!(is.check("number", &Value::Double(f64::NAN)), Some(false));
/// assert_eq!(is.check("integer", &Value::Smi(1)), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Is<'r> {
    realm: &'r Realm,
    options: IsOptions,
}

macro_rules! predicate_table {
    ($($name:literal => $method:ident),* $(,)?) => {
        /// Every predicate with its name, in alphabetical order.
        pub static PREDICATES: [(&str, PredicateFn); 16] = [
            $(($name, {
                fn entry(is: &Is<'_>, value: &Value) -> bool {
                    is.$method(value)
                }
                entry
            })),*
        ];
    };
}

predicate_table! {
    "array" => array,
    "boolean" => boolean,
    "date" => date,
    "def" => def,
    "error" => error,
    "function" => function,
    "nil" => nil,
    "null" => null,
    "number" => number,
    "object" => object,
    "promise" => promise,
    "regexp" => regexp,
    "string" => string,
    "symbol" => symbol,
    "thenable" => thenable,
    "undefined" => undefined,
}

impl<'r> Is<'r> {
    /// Binds the predicates to `realm` with default options.
    pub fn new(realm: &'r Realm) -> Self {
        Self::with_options(realm, IsOptions::default())
    }

    /// Binds the predicates to `realm`.
    pub fn with_options(realm: &'r Realm, options: IsOptions) -> Self {
        Is { realm, options }
    }

    /// The realm the promise and thenable checks consult.
    pub fn realm(&self) -> &'r Realm {
        self.realm
    }

    /// The options in effect.
    pub fn options(&self) -> &IsOptions {
        &self.options
    }

    /// The classification primitive.
    pub fn classify(&self, value: &Value) -> Tag {
        classify(value)
    }

    /// Looks up a predicate by name.
    pub fn predicate(name: &str) -> Option<PredicateFn> {
        PREDICATES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .map(|(_, predicate)| *predicate)
    }

    /// Runs the predicate called `name`; `None` if there is no such
    /// predicate.
    pub fn check(&self, name: &str, value: &Value) -> Option<bool> {
        Self::predicate(name).map(|predicate| predicate(self, value))
    }

    /// The predicate names.
    pub fn names() -> impl Iterator<Item = &'static str> {
        PREDICATES.iter().map(|(name, _)| *name)
    }

    /// See [`is::array`].
    pub fn array(&self, value: &Value) -> bool {
        is::array(value)
    }

    /// See [`is::boolean`].
    pub fn boolean(&self, value: &Value) -> bool {
        is::boolean(value)
    }

    /// See [`is::date`].
    pub fn date(&self, value: &Value) -> bool {
        is::date(value)
    }

    /// See [`is::def`].
    pub fn def(&self, value: &Value) -> bool {
        is::def(value)
    }

    /// See [`is::error`].
    pub fn error(&self, value: &Value) -> bool {
        is::error(value)
    }

    /// See [`is::function`].
    pub fn function(&self, value: &Value) -> bool {
        is::function(value)
    }

    /// See [`is::nil`].
    pub fn nil(&self, value: &Value) -> bool {
        is::nil(value)
    }

    /// See [`is::null`].
    pub fn null(&self, value: &Value) -> bool {
        is::null(value)
    }

    /// See [`is::number`].
    pub fn number(&self, value: &Value) -> bool {
        is::number(value)
    }

    /// See [`is::object`].
    pub fn object(&self, value: &Value) -> bool {
        is::object(value)
    }

    /// See [`is::promise`].
    pub fn promise(&self, value: &Value) -> bool {
        is::promise(self.realm, &self.options, value)
    }

    /// See [`is::regexp`].
    pub fn regexp(&self, value: &Value) -> bool {
        is::regexp(value)
    }

    /// See [`is::string`].
    pub fn string(&self, value: &Value) -> bool {
        is::string(value)
    }

    /// See [`is::symbol`].
    pub fn symbol(&self, value: &Value) -> bool {
        is::symbol(value)
    }

    /// See [`is::thenable`].
    pub fn thenable(&self, value: &Value) -> bool {
        is::thenable(self.realm, value)
    }

    /// See [`is::undefined`].
    pub fn undefined(&self, value: &Value) -> bool {
        is::undefined(value)
    }
}
