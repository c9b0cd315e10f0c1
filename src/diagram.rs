//! Diagram build context: element registry and connector driver
//!
//! A `Diagram` scopes all mutable routing state (anchor occupancy) to one
//! build, so independent diagrams never interact. Connectors are resolved and
//! committed in the order `connect` is called; that order decides which
//! connector wins a contested anchor, so callers wanting reproducible output
//! should connect in a fixed order.

use std::collections::HashMap;

use crate::geometry::Point;
use crate::layout::{
    find_similar, Connector, ConnectorId, ConnectorStyle, Element, ElementKind, LayoutConfig,
    LayoutError,
};

/// One diagram under construction: positioned elements plus the connectors
/// routed between them so far.
#[derive(Debug, Default)]
pub struct Diagram {
    config: LayoutConfig,
    elements: Vec<Element>,
    index: HashMap<String, usize>,
    connectors: Vec<Connector>,
}

impl Diagram {
    pub fn new() -> Self {
        Self::with_config(LayoutConfig::default())
    }

    pub fn with_config(config: LayoutConfig) -> Self {
        Self {
            config,
            elements: Vec::new(),
            index: HashMap::new(),
            connectors: Vec::new(),
        }
    }

    /// Declare a positioned element. Names are unique per diagram.
    pub fn add_element(
        &mut self,
        name: &str,
        color: &str,
        kind: ElementKind,
        location: Point,
    ) -> Result<(), LayoutError> {
        if self.index.contains_key(name) {
            return Err(LayoutError::DuplicateElement {
                name: name.to_string(),
            });
        }
        let mut element = Element::with_config(name, color, kind, &self.config);
        element.move_to(location);
        self.index.insert(name.to_string(), self.elements.len());
        self.elements.push(element);
        Ok(())
    }

    /// Route a connector from one element to another and commit its two
    /// endpoints.
    ///
    /// Two phases, per the routing contract: `Connector::between` resolves
    /// geometry without touching occupancy, then the resolved endpoints are
    /// registered against their anchors, which locks them against every later
    /// routing request.
    pub fn connect(
        &mut self,
        from: &str,
        to: &str,
        style: ConnectorStyle,
    ) -> Result<ConnectorId, LayoutError> {
        let source = self.lookup(from)?;
        let target = self.lookup(to)?;
        if source == target {
            return Err(LayoutError::SelfConnection {
                name: from.to_string(),
            });
        }
        if style.heads < 1 {
            return Err(LayoutError::InvalidHeadCount {
                from: from.to_string(),
                to: to.to_string(),
                heads: style.heads,
            });
        }

        let connector =
            Connector::between(&self.elements[source], &self.elements[target], style)?;
        let id = self.connectors.len();
        // The stored path is head-at-target: tip commits on the target
        // border, end on the source border.
        let (head, tail) = (connector.path().tip(), connector.path().end());
        self.connectors.push(connector);
        self.elements[target].border_mut().add_heads(head, &[id]);
        self.elements[source].border_mut().add_tails(tail, &[id]);
        Ok(id)
    }

    fn lookup(&self, name: &str) -> Result<usize, LayoutError> {
        self.index.get(name).copied().ok_or_else(|| {
            let known = self.index.keys().map(String::as_str);
            LayoutError::unknown(name, find_similar(known, name, 2))
        })
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    pub fn get(&self, name: &str) -> Option<&Element> {
        self.index.get(name).map(|&i| &self.elements[i])
    }

    /// Smallest box containing every element, routed path, arrowhead, and
    /// label box, as `(origin, extent)`. Zero-sized for an empty diagram.
    pub fn bounds(&self) -> (Point, Point) {
        let mut bounds: Option<(Point, Point)> = None;
        let mut include = |p: Point| {
            bounds = Some(match bounds {
                None => (p, p),
                Some((min, max)) => (
                    Point::new(min.x.min(p.x), min.y.min(p.y)),
                    Point::new(max.x.max(p.x), max.y.max(p.y)),
                ),
            });
        };

        for element in &self.elements {
            include(element.location());
            include(element.location() + element.extent());
        }
        for connector in &self.connectors {
            for &p in connector.path().points() {
                include(p);
            }
            for arrow in connector.arrows() {
                for &p in arrow.points() {
                    include(p);
                }
            }
            if let Some(label) = connector.label_box() {
                include(label.origin);
                include(label.origin + label.extent);
            }
        }

        match bounds {
            Some((min, max)) => (min, max - min),
            None => (Point::new(0, 0), Point::new(0, 0)),
        }
    }
}
