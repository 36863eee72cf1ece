use std::fmt;
use std::sync::Arc;

type EmbedFn<Whole, Part> = dyn Fn(Part) -> Whole + Send + Sync;
type ExtractFn<Whole, Part> = dyn Fn(&Whole) -> Option<Part> + Send + Sync;

/// A pair of functions focusing on one case of `Whole`.
///
/// `embed` always succeeds; `extract` returns `None` when the value is some
/// other case.
///
/// ```
/// use mimer::optics::Prism;
///
/// #[derive(Debug, Clone, PartialEq)]
/// enum Shape {
///     Circle(u32),
///     Square(u32),
/// }
///
/// let circle = Prism::new(Shape::Circle, |shape: &Shape| match shape {
///     Shape::Circle(radius) => Some(*radius),
///     _ => None,
/// });
///
/// assert_eq!(circle.embed(3), Shape::Circle(3));
/// assert_eq!(circle.extract(&Shape::Circle(3)), Some(3));
/// assert_eq!(circle.extract(&Shape::Square(3)), None);
/// ```
pub struct Prism<Whole, Part> {
    embed: Arc<EmbedFn<Whole, Part>>,
    extract: Arc<ExtractFn<Whole, Part>>,
}

impl<Whole, Part> Prism<Whole, Part> {
    pub fn new<E, X>(embed: E, extract: X) -> Self
    where
        E: Fn(Part) -> Whole + Send + Sync + 'static,
        X: Fn(&Whole) -> Option<Part> + Send + Sync + 'static,
    {
        Self {
            embed: Arc::new(embed),
            extract: Arc::new(extract),
        }
    }

    /// Wrap a part back into the whole.
    pub fn embed(&self, part: Part) -> Whole {
        (self.embed)(part)
    }

    /// Narrow the whole to this case, if it is this case.
    pub fn extract(&self, whole: &Whole) -> Option<Part> {
        (self.extract)(whole)
    }
}

impl<Whole: 'static, Part: 'static> Prism<Whole, Part> {
    /// Focus further into the part.
    ///
    /// The composed prism extracts only when both prisms extract, and embeds
    /// through both in reverse order.
    pub fn then<Inner: 'static>(self, next: Prism<Part, Inner>) -> Prism<Whole, Inner> {
        let outer_embed = self.embed;
        let inner_embed = next.embed;
        let outer_extract = self.extract;
        let inner_extract = next.extract;

        Prism::new(
            move |inner: Inner| outer_embed(inner_embed(inner)),
            move |whole: &Whole| {
                let part = outer_extract(whole)?;
                inner_extract(&part)
            },
        )
    }
}

impl<Whole, Part> Clone for Prism<Whole, Part> {
    fn clone(&self) -> Self {
        Self {
            embed: Arc::clone(&self.embed),
            extract: Arc::clone(&self.extract),
        }
    }
}

impl<Whole, Part> fmt::Debug for Prism<Whole, Part> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prism")
            .field("whole", &std::any::type_name::<Whole>())
            .field("part", &std::any::type_name::<Part>())
            .finish()
    }
}
