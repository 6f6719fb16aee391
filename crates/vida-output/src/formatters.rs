use vida_types::*;

pub const NO_PATIENTS: &str = "Nenhum paciente cadastrado ainda.";

pub fn format_menu(clinic_name: &str) -> String {
    [
        format!("=== SISTEMA {} ===", clinic_name),
        "1. Cadastrar paciente".to_string(),
        "2. Ver estatísticas".to_string(),
        "3. Buscar paciente".to_string(),
        "4. Listar todos os pacientes".to_string(),
        "5. Sair".to_string(),
    ]
    .join("\n")
}

pub fn format_section(title: &str) -> String {
    format!("--- {} ---", title)
}

pub fn format_registered() -> String {
    "Paciente cadastrado com sucesso!".to_string()
}

pub fn format_statistics(stats: Option<&Statistics>) -> String {
    let Some(stats) = stats else {
        return NO_PATIENTS.to_string();
    };

    [
        format!("Número total de pacientes: {}", stats.count),
        format!("Idade média dos pacientes: {:.1} anos", stats.average_age),
        format!("Paciente mais novo: {}", format_name_and_age(&stats.youngest)),
        format!("Paciente mais velho: {}", format_name_and_age(&stats.oldest)),
    ]
    .join("\n")
}

pub fn format_search(outcome: &SearchOutcome) -> String {
    match outcome {
        SearchOutcome::NoPatients => NO_PATIENTS.to_string(),
        SearchOutcome::NoMatches { query } => {
            format!("Nenhum paciente encontrado com o nome '{}'.", query)
        }
        SearchOutcome::Found(patients) => {
            let mut lines = vec![format!("Pacientes encontrados ({}):", patients.len())];
            for p in patients {
                lines.push(format!(
                    "  - Nome: {}, Idade: {}, Telefone: {}",
                    p.name, p.age, p.phone
                ));
            }
            lines.join("\n")
        }
    }
}

pub fn format_patient_list(list: Option<&PatientList>, rule_width: usize) -> String {
    let Some(list) = list else {
        return NO_PATIENTS.to_string();
    };

    let rule = "-".repeat(rule_width);
    let mut lines = vec![
        format!("Total de pacientes: {}", list.total),
        String::new(),
        rule.clone(),
    ];
    for p in &list.patients {
        lines.push(format!("Nome:     {}", p.name));
        lines.push(format!("Idade:    {}", p.age));
        lines.push(format!("Telefone: {}", p.phone));
        lines.push(rule.clone());
    }
    lines.join("\n")
}

fn format_name_and_age(patient: &Patient) -> String {
    format!("{} ({} anos)", patient.name, patient.age)
}
