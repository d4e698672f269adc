/// Correo de confirmación listo para despachar.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html: String,
}

/// Canal por el que terminó (o no) saliendo el correo. El tag viaja
/// en la respuesta vía `as_str`. `Demo` es el tag de "quedó encolado"
/// cuando la API primaria falla.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMethod {
    Resend,
    Smtp,
    Demo,
    FileSaved,
}

impl DeliveryMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryMethod::Resend => "resend",
            DeliveryMethod::Smtp => "smtp",
            DeliveryMethod::Demo => "demo",
            DeliveryMethod::FileSaved => "file-saved",
        }
    }
}

/// Resultado del dispatcher. Nunca se propaga como error hacia el
/// endpoint: `success: false` sólo puede venir del canal SMTP.
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    pub success: bool,
    pub method: DeliveryMethod,
    pub detail: Option<String>,
}
