use std::fmt;
use std::sync::Arc;

type GetFn<Root, Value> = dyn Fn(&Root) -> &Value + Send + Sync;

/// Read-only path from a root value to one of its fields.
///
/// ```
/// use mimer::optics::KeyPath;
///
/// struct Settings {
///     volume: u8,
/// }
///
/// let volume = KeyPath::new(|settings: &Settings| &settings.volume);
/// assert_eq!(*volume.get(&Settings { volume: 7 }), 7);
/// ```
pub struct KeyPath<Root, Value> {
    get: Arc<GetFn<Root, Value>>,
}

impl<Root, Value> KeyPath<Root, Value> {
    pub fn new<F>(get: F) -> Self
    where
        F: Fn(&Root) -> &Value + Send + Sync + 'static,
    {
        Self { get: Arc::new(get) }
    }

    pub fn get<'a>(&self, root: &'a Root) -> &'a Value {
        (self.get)(root)
    }
}

impl<Root: 'static, Value: 'static> KeyPath<Root, Value> {
    /// Extend the path one level deeper.
    pub fn then<Next: 'static>(self, next: KeyPath<Value, Next>) -> KeyPath<Root, Next> {
        let first = self.get;
        let second = next.get;
        KeyPath::new(move |root: &Root| second(first(root)))
    }
}

impl<Root, Value> Clone for KeyPath<Root, Value> {
    fn clone(&self) -> Self {
        Self {
            get: Arc::clone(&self.get),
        }
    }
}

impl<Root, Value> fmt::Debug for KeyPath<Root, Value> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPath")
            .field("root", &std::any::type_name::<Root>())
            .field("value", &std::any::type_name::<Value>())
            .finish()
    }
}
