use std::path::{Path, PathBuf};

use tracing::debug;

/// Nodo de la barra lateral
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarNode {
    pub label: String,
    pub icon: Option<PathBuf>,
    /// Vista que se muestra al seleccionar el nodo
    pub page: Option<usize>,
    pub children: Vec<SidebarNode>,
}

/// Árbol de navegación de la barra lateral, sin depender de ningún toolkit.
///
/// Los nodos se direccionan con rutas separadas por `/`, p. ej. `"Library/Music"`.
#[derive(Debug, Default, Clone)]
pub struct Sidebar {
    roots: Vec<SidebarNode>,
}

impl Sidebar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Añade un nodo al final de su padre. Todos los segmentos intermedios
    /// deben existir ya; si falta alguno no se inserta nada y devuelve `false`.
    pub fn add(&mut self, name: &str, icon: Option<&Path>, page: Option<usize>) -> bool {
        let segments: Vec<&str> = name.split('/').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return false;
        }

        let Some((label, parents)) = segments.split_last() else {
            return false;
        };

        let Some(siblings) = Self::children_at(&mut self.roots, parents) else {
            debug!(name, "sidebar parent does not exist");
            return false;
        };

        siblings.push(SidebarNode {
            label: (*label).to_owned(),
            icon: icon.map(Path::to_path_buf),
            page,
            children: Vec::new(),
        });
        true
    }

    /// Quita el nodo y todo lo que cuelga de él.
    pub fn remove(&mut self, name: &str) -> bool {
        let segments: Vec<&str> = name.split('/').collect();
        let Some((label, parents)) = segments.split_last() else {
            return false;
        };

        let Some(siblings) = Self::children_at(&mut self.roots, parents) else {
            return false;
        };

        match siblings.iter().position(|n| n.label == *label) {
            Some(index) => {
                siblings.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, name: &str) -> Option<&SidebarNode> {
        let mut level = &self.roots;
        let mut found = None;
        for segment in name.split('/') {
            let node = level.iter().find(|n| n.label == segment)?;
            level = &node.children;
            found = Some(node);
        }
        found
    }

    /// Página asociada al nodo seleccionado; `None` para nodos sin vista.
    pub fn page_for(&self, name: &str) -> Option<usize> {
        self.get(name).and_then(|node| node.page)
    }

    /// Recorrido en preorden: `(profundidad, etiqueta)`.
    pub fn walk(&self) -> Vec<(usize, &str)> {
        fn visit<'a>(nodes: &'a [SidebarNode], depth: usize, out: &mut Vec<(usize, &'a str)>) {
            for node in nodes {
                out.push((depth, node.label.as_str()));
                visit(&node.children, depth + 1, out);
            }
        }

        let mut out = Vec::new();
        visit(&self.roots, 0, &mut out);
        out
    }

    fn children_at<'a>(
        mut level: &'a mut Vec<SidebarNode>,
        path: &[&str],
    ) -> Option<&'a mut Vec<SidebarNode>> {
        for segment in path {
            let node = level.iter_mut().find(|n| n.label == *segment)?;
            level = &mut node.children;
        }
        Some(level)
    }
}
