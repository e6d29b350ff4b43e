//! Mount points handed to a scene by the routing layer.

/// A host container a scene renders into: a named, sized slot holding the
/// nodes attached to it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mount {
    name: String,
    width: u32,
    height: u32,
    nodes: Vec<String>,
}

impl Mount {
    pub fn new(name: impl Into<String>, width: u32, height: u32) -> Self {
        Self { name: name.into(), width, height, nodes: Vec::new() }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn set_size(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }

    pub fn attach(&mut self, node: impl Into<String>) {
        self.nodes.push(node.into());
    }

    /// Removes `node`; returns whether it was attached.
    pub fn detach(&mut self, node: &str) -> bool {
        let before = self.nodes.len();
        self.nodes.retain(|n| n != node);
        self.nodes.len() != before
    }

    #[inline]
    pub fn nodes(&self) -> &[String] {
        &self.nodes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attach_then_detach() {
        let mut m = Mount::new("canvas", 640, 480);
        m.attach("a");
        m.attach("b");
        assert!(m.detach("a"));
        assert!(!m.detach("a"));
        assert_eq!(m.nodes(), ["b".to_string()]);
    }
}
