//! The built-in business formula catalog.
//!
//! Seven categories of three templates each, offered as starting points in
//! the formula selector. Seed variable values are illustrative defaults the
//! user is expected to overwrite.

use super::{FormulaTemplate, TemplateCategory};
use crate::node::Variable;

fn template(
    name: &str,
    formula: &str,
    description: &str,
    variables: Vec<Variable>,
) -> FormulaTemplate {
    FormulaTemplate {
        name: name.to_string(),
        formula: formula.to_string(),
        description: description.to_string(),
        variables,
    }
}

fn category(name: &str, formulas: Vec<FormulaTemplate>) -> TemplateCategory {
    TemplateCategory {
        category: name.to_string(),
        formulas,
    }
}

fn var(name: &str, value: f64) -> Variable {
    Variable::new(name, value)
}

pub(super) fn build_catalog() -> Vec<TemplateCategory> {
    vec![
        category(
            "Rentabilité",
            vec![
                template(
                    "Marge brute",
                    "margeBrute = revenu - coutDirect",
                    "Calcule la marge brute en soustrayant les coûts directs du revenu",
                    vec![var("revenu", 100_000.0), var("coutDirect", 60_000.0)],
                ),
                template(
                    "Marge nette",
                    "margeNette = (revenu - coutTotal) / revenu * 100",
                    "Calcule la marge nette en pourcentage",
                    vec![var("revenu", 100_000.0), var("coutTotal", 85_000.0)],
                ),
                template(
                    "ROI (Retour sur investissement)",
                    "roi = (profit / investissement) * 100",
                    "Calcule le retour sur investissement en pourcentage",
                    vec![var("profit", 20_000.0), var("investissement", 100_000.0)],
                ),
            ],
        ),
        category(
            "Tarification",
            vec![
                template(
                    "Taux Journalier Moyen (TJM)",
                    "tjm = revenusAnnuels / joursFacturables",
                    "Calcule le TJM en divisant les revenus annuels par le nombre de jours facturables",
                    vec![var("revenusAnnuels", 120_000.0), var("joursFacturables", 200.0)],
                ),
                template(
                    "Prix de vente",
                    "prixVente = coutUnitaire / (1 - margeVoulue)",
                    "Calcule le prix de vente en fonction du coût unitaire et de la marge voulue",
                    vec![var("coutUnitaire", 50.0), var("margeVoulue", 0.3)],
                ),
                template(
                    "Coût Journalier Moyen (CJM)",
                    "cjm = coutAnnuel / joursOuvres",
                    "Calcule le coût journalier moyen d'un employé",
                    vec![var("coutAnnuel", 80_000.0), var("joursOuvres", 220.0)],
                ),
            ],
        ),
        category(
            "Résilience",
            vec![
                template(
                    "Point Mort",
                    "pointMort = chargesFixesAnnuelles / tauxMargeContribution",
                    "Calcule le point mort (seuil de rentabilité)",
                    vec![
                        var("chargesFixesAnnuelles", 150_000.0),
                        var("tauxMargeContribution", 0.35),
                    ],
                ),
                template(
                    "Runway",
                    "runway = tresorerie / burnRate",
                    "Calcule le nombre de mois avant épuisement de la trésorerie",
                    vec![var("tresorerie", 300_000.0), var("burnRate", 50_000.0)],
                ),
                template(
                    "Ratio de diversification clients",
                    "ratioDiversification = 1 - (CA_PlusGrosClient / CA_Total)",
                    "Mesure la dépendance au plus gros client (0 = total dépendant, 1 = parfaitement diversifié)",
                    vec![var("CA_PlusGrosClient", 200_000.0), var("CA_Total", 500_000.0)],
                ),
            ],
        ),
        category(
            "Croissance",
            vec![
                template(
                    "Taux de croissance annuel",
                    "tauxCroissance = ((revenueAnnee2 / revenueAnnee1) - 1) * 100",
                    "Calcule le taux de croissance annuel en pourcentage",
                    vec![var("revenueAnnee1", 500_000.0), var("revenueAnnee2", 650_000.0)],
                ),
                template(
                    "CAGR (Taux de Croissance Annuel Composé)",
                    "cagr = ((valeurFinale / valeurInitiale) ^ (1 / nombreAnnees) - 1) * 100",
                    "Calcule le taux de croissance annuel composé sur plusieurs années",
                    vec![
                        var("valeurInitiale", 100_000.0),
                        var("valeurFinale", 161_051.0),
                        var("nombreAnnees", 5.0),
                    ],
                ),
                template(
                    "Ratio client-employé",
                    "ratioClientEmploye = nombreClients / nombreEmployes",
                    "Mesure l'efficacité opérationnelle par employé",
                    vec![var("nombreClients", 120.0), var("nombreEmployes", 15.0)],
                ),
            ],
        ),
        category(
            "Clients",
            vec![
                template(
                    "Coût d'acquisition client (CAC)",
                    "cac = depensesMarketing / nouveauxClients",
                    "Calcule le coût moyen d'acquisition d'un nouveau client",
                    vec![var("depensesMarketing", 50_000.0), var("nouveauxClients", 100.0)],
                ),
                template(
                    "Valeur vie client (CLV)",
                    "clv = revenueAnnuelMoyen * dureeRelationClient * margeNette",
                    "Estime la valeur totale qu'un client génère pendant sa relation avec l'entreprise",
                    vec![
                        var("revenueAnnuelMoyen", 2_000.0),
                        var("dureeRelationClient", 3.0),
                        var("margeNette", 0.2),
                    ],
                ),
                template(
                    "Ratio CLV:CAC",
                    "ratioClvCac = clv / cac",
                    "Compare la valeur vie client au coût d'acquisition (idéalement > 3)",
                    vec![var("clv", 1_200.0), var("cac", 400.0)],
                ),
            ],
        ),
        category(
            "Financier",
            vec![
                FormulaTemplate {
                    name: "Valeur Actuelle Nette (VAN)".to_string(),
                    formula: "van = investissementInitial + npv(tauxActualisation, cashFlows)"
                        .to_string(),
                    description: "Calcule la valeur actuelle des flux de trésorerie futurs"
                        .to_string(),
                    variables: vec![
                        var("investissementInitial", -100_000.0),
                        Variable::new("cashFlows", vec![30_000.0, 40_000.0, 50_000.0, 40_000.0]),
                        var("tauxActualisation", 0.1),
                    ],
                },
                template(
                    "Ratio d'endettement",
                    "ratioEndettement = detteTotal / capitauxPropres",
                    "Mesure la proportion de dette par rapport aux fonds propres",
                    vec![var("detteTotal", 200_000.0), var("capitauxPropres", 500_000.0)],
                ),
                template(
                    "Besoin en fonds de roulement (BFR)",
                    "bfr = (stockMoyen + creancesClients) - dettesFournisseurs",
                    "Calcule le besoin en financement du cycle d'exploitation",
                    vec![
                        var("stockMoyen", 50_000.0),
                        var("creancesClients", 80_000.0),
                        var("dettesFournisseurs", 40_000.0),
                    ],
                ),
            ],
        ),
        category(
            "Productivité",
            vec![
                template(
                    "Chiffre d'affaires par employé",
                    "caParEmploye = chiffreAffairesTotal / nombreEmployes",
                    "Mesure la productivité globale de l'entreprise",
                    vec![
                        var("chiffreAffairesTotal", 1_200_000.0),
                        var("nombreEmployes", 15.0),
                    ],
                ),
                template(
                    "Taux d'utilisation des ressources",
                    "tauxUtilisation = (heuresBillables / heuresDisponibles) * 100",
                    "Mesure l'efficacité de l'utilisation des ressources humaines",
                    vec![var("heuresBillables", 1_600.0), var("heuresDisponibles", 2_000.0)],
                ),
                template(
                    "Délai de conversion (Lead Time)",
                    "leadTime = tempsProduction + tempsAttente + tempsTransport",
                    "Calcule le temps total nécessaire pour livrer un produit/service",
                    vec![
                        var("tempsProduction", 5.0),
                        var("tempsAttente", 3.0),
                        var("tempsTransport", 2.0),
                    ],
                ),
            ],
        ),
    ]
}
