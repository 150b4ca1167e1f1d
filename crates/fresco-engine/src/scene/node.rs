use super::shapes::container::{Container, FacingContainer};
use super::shapes::data_mesh::DataMesh;
use super::shapes::mesh::Mesh;
use super::shapes::points::Points;
use super::shapes::polyline::PolyLine;
use super::shapes::segments::LineSegments;
use super::shapes::text::Text;
use super::shapes::triangle::Triangle;

/// Closed set of primitive kinds a scene can hold.
#[derive(Debug)]
pub enum Node {
    Triangle(Triangle),
    PolyLine(PolyLine),
    LineSegments(LineSegments),
    Mesh(Mesh),
    DataMesh(DataMesh),
    Points(Points),
    Text(Text),
    Container(Container),
    FacingContainer(FacingContainer),
}

impl Node {
    /// Child list for container variants.
    pub(crate) fn children_mut(&mut self) -> Option<&mut Vec<super::NodeId>> {
        match self {
            Node::Container(c) => Some(&mut c.children),
            Node::FacingContainer(c) => Some(&mut c.children),
            _ => None,
        }
    }

    #[inline]
    pub fn is_container(&self) -> bool {
        matches!(self, Node::Container(_) | Node::FacingContainer(_))
    }
}

macro_rules! impl_from_shape {
    ($($shape:ident),* $(,)?) => {
        $(
            impl From<$shape> for Node {
                #[inline]
                fn from(s: $shape) -> Self {
                    Node::$shape(s)
                }
            }
        )*
    };
}

impl_from_shape!(
    Triangle,
    PolyLine,
    LineSegments,
    Mesh,
    DataMesh,
    Points,
    Text,
    Container,
    FacingContainer,
);
