use crate::domain::model::Service;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ServiceDetails {
    pub service: Service,
    pub description: &'static str,
    /// Starting price in whole reais.
    pub price_from_brl: u32,
    pub duration: &'static str,
    pub features: &'static [&'static str],
}

impl ServiceDetails {
    pub fn price_label(&self) -> String {
        format!("A partir de R$ {}", self.price_from_brl)
    }
}

impl Service {
    pub fn details(&self) -> ServiceDetails {
        match self {
            Service::HairApplication => ServiceDetails {
                service: *self,
                description: "Aplicação profissional de cabelos humanos, fibra humana e fibra orgânica com técnicas avançadas para um resultado natural e duradouro.",
                price_from_brl: 200,
                duration: "2-3 horas",
                features: &[
                    "Cabelos 100% humanos",
                    "Fibra humana premium",
                    "Fibra orgânica de qualidade",
                    "Técnicas modernas de aplicação",
                    "Resultado natural",
                    "Duração de 3-6 meses",
                ],
            },
            Service::CustomWig => ServiceDetails {
                service: *self,
                description: "Perucas sob medida feitas com cabelos naturais de alta qualidade, personalizadas para seu formato de rosto e estilo pessoal.",
                price_from_brl: 800,
                duration: "1-2 semanas para confecção",
                features: &[
                    "Medidas personalizadas",
                    "Cabelos naturais premium",
                    "Corte e cor sob medida",
                    "Base confortável",
                    "Acabamento profissional",
                    "Manutenção inclusa",
                ],
            },
            Service::HairConsultation => ServiceDetails {
                service: *self,
                description: "Consultoria especializada para cuidados capilares, análise do couro cabeludo e recomendações personalizadas para seus cabelos.",
                price_from_brl: 150,
                duration: "1 hora",
                features: &[
                    "Análise completa do couro cabeludo",
                    "Diagnóstico capilar",
                    "Recomendações personalizadas",
                    "Plano de tratamento",
                    "Orientações de cuidados",
                    "Acompanhamento mensal",
                ],
            },
        }
    }
}

pub fn catalogue() -> Vec<ServiceDetails> {
    Service::ALL.iter().map(Service::details).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_covers_every_service() {
        let entries = catalogue();
        assert_eq!(entries.len(), Service::ALL.len());
        for (entry, service) in entries.iter().zip(Service::ALL) {
            assert_eq!(entry.service, service);
            assert_eq!(entry.features.len(), 6);
        }
    }

    #[test]
    fn test_price_label() {
        assert_eq!(
            Service::HairConsultation.details().price_label(),
            "A partir de R$ 150"
        );
    }
}
