#[derive(Clone, Debug, PartialEq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub features: [&'static str; 4],
}

pub static SERVICES: &[Service] = &[
    Service {
        icon: "💻",
        title: "Desarrollo Web",
        description: "Sitios modernos y responsivos, desde landing pages hasta aplicaciones web complejas.",
        features: ["React & Next.js", "Diseño Responsivo", "Gestores de Contenido", "Performance"],
    },
    Service {
        icon: "🗄️",
        title: "Sistemas y Bases de Datos",
        description: "La lógica interna de tu aplicación y la gestión segura de toda su información.",
        features: ["Bases de Datos", "Sistemas", "APIs", "Integraciones"],
    },
    Service {
        icon: "📱",
        title: "Desarrollo Móvil",
        description: "Aplicaciones nativas e híbridas para iOS y Android.",
        features: ["React Native", "Flutter", "iOS & Android", "App Store"],
    },
    Service {
        icon: "⚙️",
        title: "Mantenimiento",
        description: "Actualizaciones y monitoreo para que tus aplicaciones sigan funcionando seguras.",
        features: ["Actualizaciones", "Backups", "Monitoreo", "Soporte Técnico"],
    },
    Service {
        icon: "📈",
        title: "Optimización",
        description: "Mejoramos velocidad, SEO y experiencia de usuario.",
        features: ["Velocidad", "SEO", "Compresión de Imágenes", "Caching"],
    },
    Service {
        icon: "🖥️",
        title: "Servicio de Hosting",
        description: "Hosting confiable y escalable con alta disponibilidad y soporte especializado.",
        features: ["Hosting Compartido", "VPS Dedicados", "SSL Gratuito", "Panel de Control"],
    },
];
