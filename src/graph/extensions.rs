use crate::graph::{amplify::Amplify, gate::Gate, node::GraphNode, sum::Sum, through::Through};

pub trait NodeExt: GraphNode + Sized {
    fn amplify<M>(self, modulator: M) -> Amplify<Self, M> {
        Amplify::new(self, modulator)
    }

    fn through<F: GraphNode>(self, filter: F) -> Through<Self, F> {
        Through::new(self, filter)
    }

    fn sum<B: GraphNode>(self, other: B) -> Sum<Self, B> {
        Sum::new(self, other)
    }

    fn gate(self, duration: f32) -> Gate<Self> {
        Gate::new(self, duration)
    }
}

impl<T: GraphNode> NodeExt for T {}
