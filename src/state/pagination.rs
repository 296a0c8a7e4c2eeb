// ============================================================================
// PAGINATION - Ventana de página (matemática pura, sin DOM)
// ============================================================================

/// Posición de una página dentro de una colección de `total` filas.
/// Todos los cálculos de rango visible salen de aquí; los componentes
/// solo muestran los valores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub total: u64,
    pub page_index: u32,
    pub page_size: u32,
}

impl PageWindow {
    pub fn new(total: u64, page_index: u32, page_size: u32) -> Self {
        Self {
            total,
            page_index,
            page_size,
        }
    }

    /// Número total de páginas, como mínimo 1 (una colección vacía
    /// sigue teniendo una página vacía).
    pub fn total_pages(&self) -> u32 {
        let pages = self.total.div_ceil(u64::from(self.page_size));
        pages.clamp(1, u64::from(u32::MAX)) as u32
    }

    /// Primera fila visible, en base 1. 0 si no hay filas.
    pub fn from(&self) -> u64 {
        if self.total == 0 {
            0
        } else {
            u64::from(self.page_index) * u64::from(self.page_size) + 1
        }
    }

    /// Última fila visible, en base 1.
    pub fn to(&self) -> u64 {
        (u64::from(self.page_index) + 1)
            .saturating_mul(u64::from(self.page_size))
            .min(self.total)
    }

    pub fn has_prev(&self) -> bool {
        self.page_index > 0
    }

    pub fn has_next(&self) -> bool {
        self.page_index + 1 < self.total_pages()
    }

    /// Índice de la página anterior, sin pasar de 0.
    pub fn prev_index(&self) -> u32 {
        self.page_index.saturating_sub(1)
    }

    /// Índice de la página siguiente, sin pasar de la última.
    pub fn next_index(&self) -> u32 {
        if self.has_next() {
            self.page_index + 1
        } else {
            self.page_index
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_collection_is_one_empty_page() {
        let w = PageWindow::new(0, 0, 50);
        assert_eq!(w.total_pages(), 1);
        assert_eq!(w.from(), 0);
        assert_eq!(w.to(), 0);
        assert!(!w.has_prev());
        assert!(!w.has_next());
    }

    #[test]
    fn partial_last_page() {
        // 137 filas con páginas de 50 → 3 páginas
        let w = PageWindow::new(137, 0, 50);
        assert_eq!(w.total_pages(), 3);
        assert_eq!(w.from(), 1);
        assert_eq!(w.to(), 50);
        assert!(!w.has_prev());
        assert!(w.has_next());

        let last = PageWindow::new(137, 2, 50);
        assert_eq!(last.from(), 101);
        assert_eq!(last.to(), 137);
        assert!(last.has_prev());
        assert!(!last.has_next());
    }

    #[test]
    fn exact_multiple_of_page_size() {
        let w = PageWindow::new(100, 1, 50);
        assert_eq!(w.total_pages(), 2);
        assert_eq!(w.from(), 51);
        assert_eq!(w.to(), 100);
        assert!(!w.has_next());
    }

    #[test]
    fn navigation_clamps_at_boundaries() {
        let first = PageWindow::new(137, 0, 50);
        assert_eq!(first.prev_index(), 0);
        assert_eq!(first.next_index(), 1);

        let last = PageWindow::new(137, 2, 50);
        assert_eq!(last.next_index(), 2);
        assert_eq!(last.prev_index(), 1);
    }

    #[test]
    fn single_row() {
        let w = PageWindow::new(1, 0, 50);
        assert_eq!(w.total_pages(), 1);
        assert_eq!(w.from(), 1);
        assert_eq!(w.to(), 1);
    }
}
