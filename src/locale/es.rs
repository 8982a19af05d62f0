use super::Messages;

/// Spanish messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct Spanish;

impl Messages for Spanish {
    fn min_len(&self, min_len: usize) -> String {
        format!("La cadena debe tener al menos {min_len} caracteres.")
    }

    fn max_len(&self, max_len: usize) -> String {
        format!("La cadena debe tener al menos {max_len} caracteres.")
    }

    fn no_options(&self) -> String {
        "No hay opciones para elegir.".into()
    }

    fn invalid_option(&self) -> String {
        "La opción no es válida.".into()
    }

    fn file_not_found(&self) -> String {
        "El archivo no existe.".into()
    }

    fn not_int(&self) -> String {
        "El valor no es un entero válido.".into()
    }

    fn not_natural(&self) -> String {
        "El número debe ser natural -> [0, inf)".into()
    }

    fn int_not_in_range(&self, min: i32, max: i32) -> String {
        format!("El número debe ser un entero en el rango [{min}, {max}]")
    }

    fn not_float(&self) -> String {
        "El valor no es un float válido.".into()
    }

    fn float_not_in_range(&self, min: f32, max: f32) -> String {
        format!("El número debe ser un float en el rango [{min:.6}, {max:.6}]")
    }
}
