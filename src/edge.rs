/*!
# Edges

An edge is defined by two vertices/endpoints. Whether an edge is directed is up
to the graph representation storing it.

Graph code frequently holds "the other side" of an edge in different shapes:
a neighbor id taken straight from an adjacency list, an [`Edge`] value, or an
edge living behind a reference or smart pointer. [`EdgeRef`] unifies all of
them so that [`other_endpoint`](crate::ops::other_endpoint) can resolve the
opposite endpoint regardless of the shape:

- a raw [`Vertex`] *is* the other endpoint and is returned unchanged,
- any [`EdgeLike`] value is asked for its endpoint opposite to the known one,
- `&E`, `&mut E`, `Box<E>`, `Rc<E>` and `Arc<E>` over an [`EdgeLike`] are
  dereferenced (arbitrarily nested) and then treated as the edge itself.

Every other type is rejected at compile time:
```compile_fail
use graphbase::prelude::*;

let known: Vertex = 1;
let _ = other_endpoint(known, &3u32);
```
*/

use std::{
    fmt::{Debug, Display},
    rc::Rc,
    sync::Arc,
};

use crate::node::*;

/// Capability of an edge: given one known endpoint, yield the opposite one.
///
/// Implementations may assume that `known` is one of their endpoints.
pub trait EdgeLike {
    /// Returns the endpoint opposite to `known`.
    /// For a self-loop, the opposite endpoint is `known` itself.
    ///
    /// `known` is not checked: if it is no endpoint at all, [`Edge`] panics in debug
    /// builds and returns its first endpoint in release builds.
    /// Use [`Edge::try_other`] if `known` may not be incident to the edge.
    fn other(&self, known: Vertex) -> Vertex;
}

macro_rules! impl_edge_like_through {
    ($($wrapper:ty),*) => {
        $(
            impl<E: EdgeLike + ?Sized> EdgeLike for $wrapper {
                #[inline]
                fn other(&self, known: Vertex) -> Vertex {
                    (**self).other(known)
                }
            }
        )*
    };
}

impl_edge_like_through!(&E, &mut E, Box<E>, Rc<E>, Arc<E>);

mod private {
    pub trait Sealed {}

    impl Sealed for super::Vertex {}

    impl<E: super::EdgeLike + ?Sized> Sealed for E {}
}

/// The set of shapes an edge reference may take when resolving the opposite endpoint.
///
/// This trait is sealed: it is implemented for [`Vertex`] and for everything that
/// implements [`EdgeLike`] (which includes references and smart pointers to edges).
pub trait EdgeRef: private::Sealed {
    /// Resolves the endpoint opposite to `known`
    fn resolve_other(&self, known: Vertex) -> Vertex;
}

impl EdgeRef for Vertex {
    /// A raw vertex already is the other endpoint
    #[inline]
    fn resolve_other(&self, _known: Vertex) -> Vertex {
        *self
    }
}

impl<E: EdgeLike + ?Sized> EdgeRef for E {
    #[inline]
    fn resolve_other(&self, known: Vertex) -> Vertex {
        self.other(known)
    }
}

/// An unweighted edge between two vertices
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Vertex, pub Vertex);

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Returns the endpoint opposite to `known` or `None` if `known` is not an endpoint
    pub fn try_other(&self, known: Vertex) -> Option<Vertex> {
        if known == self.0 {
            Some(self.1)
        } else if known == self.1 {
            Some(self.0)
        } else {
            None
        }
    }
}

impl EdgeLike for Edge {
    /// ** Panics in debug builds if `known` is not an endpoint **
    fn other(&self, known: Vertex) -> Vertex {
        debug_assert!(
            known == self.0 || known == self.1,
            "vertex {known} is not an endpoint of {self}"
        );
        if known == self.0 { self.1 } else { self.0 }
    }
}

impl From<(Vertex, Vertex)> for Edge {
    fn from(value: (Vertex, Vertex)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Vertex, Vertex)> for Edge {
    fn from(value: &(Vertex, Vertex)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// An edge carrying auxiliary data, most commonly a weight
#[derive(Debug, Copy, Clone, PartialEq, PartialOrd)]
pub struct WeightedEdge<W> {
    u: Vertex,
    v: Vertex,
    weight: W,
}

impl<W> WeightedEdge<W> {
    pub fn new(u: Vertex, v: Vertex, weight: W) -> Self {
        Self { u, v, weight }
    }

    /// Returns the attached weight
    pub fn weight(&self) -> &W {
        &self.weight
    }

    /// Forgets the weight
    pub fn edge(&self) -> Edge {
        Edge(self.u, self.v)
    }
}

impl<W> EdgeLike for WeightedEdge<W> {
    /// ** Panics in debug builds if `known` is not an endpoint **
    fn other(&self, known: Vertex) -> Vertex {
        self.edge().other(known)
    }
}

impl<W: Display> Display for WeightedEdge<W> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{}) [{}]", self.u, self.v, self.weight)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalization() {
        assert_eq!(Edge(3, 1).normalized(), Edge(1, 3));
        assert!(Edge(1, 3).is_normalized());
        assert!(!Edge(3, 1).is_normalized());
        assert!(Edge(2, 2).is_loop());
        assert_eq!(Edge(3, 1).reverse(), Edge(1, 3));
    }

    #[test]
    fn other_of_edge() {
        let e = Edge(4, 7);
        assert_eq!(e.other(4), 7);
        assert_eq!(e.other(7), 4);
        assert_eq!(Edge(5, 5).other(5), 5);

        assert_eq!(e.try_other(4), Some(7));
        assert_eq!(e.try_other(7), Some(4));
        assert_eq!(e.try_other(2), None);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn other_of_non_endpoint_panics() {
        Edge(4, 7).other(2);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn other_of_non_endpoint_is_first_endpoint() {
        assert_eq!(Edge(4, 7).other(2), 4);
        assert_eq!(Edge(4, 7).try_other(2), None);
    }

    #[test]
    fn other_of_weighted_edge() {
        let e = WeightedEdge::new(0, 9, 0.25);
        assert_eq!(e.other(0), 9);
        assert_eq!(e.other(9), 0);
        assert_eq!(*e.weight(), 0.25);
        assert_eq!(e.edge(), Edge(0, 9));
        assert_eq!(e.to_string(), "(0,9) [0.25]");
    }

    #[test]
    fn other_through_wrappers() {
        let e = Edge(1, 2);
        let mut m = Edge(1, 2);

        assert_eq!((&e).other(1), 2);
        assert_eq!((&mut m).other(2), 1);
        assert_eq!(Box::new(e).other(1), 2);
        assert_eq!(Rc::new(e).other(2), 1);
        assert_eq!(Arc::new(e).other(1), 2);
        assert_eq!(Rc::new(Box::new(e)).other(1), 2);

        let dynamic: Box<dyn EdgeLike> = Box::new(WeightedEdge::new(1, 2, "label"));
        assert_eq!(dynamic.other(1), 2);
    }

    #[test]
    fn resolve_raw_vertex_is_identity() {
        let w: Vertex = 42;
        assert_eq!(w.resolve_other(0), 42);
        assert_eq!(w.resolve_other(42), 42);
    }

    #[test]
    fn display() {
        assert_eq!(Edge(1, 2).to_string(), "(1,2)");
        assert_eq!(format!("{:?}", Edge(1, 2)), "(1,2)");
    }
}
