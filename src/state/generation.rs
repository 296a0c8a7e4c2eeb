// ============================================================================
// FETCH GENERATION - Descarta respuestas tardías de fetches superados
// ============================================================================
// Cada fetch captura un token al arrancar; antes de aplicar su resultado
// comprueba que siga siendo el fetch vigente. Un cambio de página rápido o
// un desmontaje invalida los tokens anteriores, así una respuesta lenta
// nunca pisa el estado de un fetch más nuevo ni de una vista destruida.

use std::cell::Cell;
use std::rc::Rc;

#[derive(Debug, Clone, Default)]
pub struct FetchGeneration {
    current: Rc<Cell<u32>>,
}

impl FetchGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arranca un fetch nuevo: invalida los anteriores y devuelve el token
    /// que el fetch debe presentar al terminar.
    pub fn begin(&self) -> u32 {
        let next = self.current.get().wrapping_add(1);
        self.current.set(next);
        next
    }

    /// ¿Sigue vigente el fetch que capturó este token?
    pub fn is_current(&self, token: u32) -> bool {
        self.current.get() == token
    }

    /// Invalida todo fetch en vuelo (teardown de la vista).
    pub fn invalidate(&self) {
        self.current.set(self.current.get().wrapping_add(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latest_fetch_wins() {
        let gen = FetchGeneration::new();
        let first = gen.begin();
        let second = gen.begin();
        // La respuesta del primer fetch llega tarde
        assert!(!gen.is_current(first));
        assert!(gen.is_current(second));
    }

    #[test]
    fn teardown_invalidates_in_flight_fetch() {
        let gen = FetchGeneration::new();
        let token = gen.begin();
        assert!(gen.is_current(token));
        gen.invalidate();
        assert!(!gen.is_current(token));
    }

    #[test]
    fn clones_share_the_counter() {
        let gen = FetchGeneration::new();
        let token = gen.begin();
        let other = gen.clone();
        other.invalidate();
        assert!(!gen.is_current(token));
    }
}
