use std::io::{self, BufRead, Write};

use tracing::info;
use vida_config::DisplayConfig;
use vida_output::*;
use vida_registry::{parse_age, validate_phone, PatientRegistry};
use vida_types::SearchOutcome;

use crate::prompt::Prompter;

const FAREWELL: &str = "Saindo do sistema... Até logo!";
const INVALID_CHOICE: &str = "Opção inválida. Por favor, escolha um número de 1 a 5.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    Register,
    Statistics,
    Search,
    ListAll,
    Exit,
}

impl MenuChoice {
    fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::Register),
            "2" => Some(MenuChoice::Statistics),
            "3" => Some(MenuChoice::Search),
            "4" => Some(MenuChoice::ListAll),
            "5" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

enum Flow {
    Continue,
    Exit,
}

/// The interactive menu. Owns the registry for the lifetime of the run.
pub struct Session<R, W> {
    prompter: Prompter<R, W>,
    registry: PatientRegistry,
    display: DisplayConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, display: DisplayConfig) -> Self {
        Self {
            prompter: Prompter::new(input, output),
            registry: PatientRegistry::new(),
            display,
        }
    }

    pub fn run(&mut self) -> io::Result<()> {
        info!("Session started");
        loop {
            let menu = format_menu(&self.display.clinic_name);
            self.prompter.say(&format!("\n\n{}", menu))?;

            let Some(answer) = self.prompter.ask("Escolha uma opção: ")? else {
                break;
            };

            let flow = match MenuChoice::parse(&answer) {
                Some(MenuChoice::Register) => self.register()?,
                Some(MenuChoice::Statistics) => self.statistics()?,
                Some(MenuChoice::Search) => self.search()?,
                Some(MenuChoice::ListAll) => self.list_all()?,
                Some(MenuChoice::Exit) => Flow::Exit,
                None => {
                    self.prompter.say(INVALID_CHOICE)?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                break;
            }
        }

        self.prompter.say(FAREWELL)?;
        info!("Session ended with {} patients registered", self.registry.len());
        Ok(())
    }

    fn section(&mut self, title: &str) -> io::Result<()> {
        self.prompter.say(&format!("\n{}", format_section(title)))
    }

    fn register(&mut self) -> io::Result<Flow> {
        self.section("Cadastro de Paciente")?;

        let Some(name) = self.prompter.ask("Nome do paciente: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(age) = self.prompter.ask_until("Idade: ", parse_age)? else {
            return Ok(Flow::Exit);
        };
        let Some(phone) = self
            .prompter
            .ask_until("Telefone (ex: (11) 99999-9999): ", validate_phone)?
        else {
            return Ok(Flow::Exit);
        };

        self.registry.register(name, age, phone);
        self.prompter.say(&format!("\n{}", format_registered()))?;
        Ok(Flow::Continue)
    }

    fn statistics(&mut self) -> io::Result<Flow> {
        self.section("Estatísticas da Clínica")?;
        let stats = self.registry.statistics();
        self.prompter.say(&format_statistics(stats.as_ref()))?;
        Ok(Flow::Continue)
    }

    fn search(&mut self) -> io::Result<Flow> {
        self.section("Buscar Paciente")?;

        // an empty registry is reported before asking for a name
        if self.registry.is_empty() {
            self.prompter.say(&format_search(&SearchOutcome::NoPatients))?;
            return Ok(Flow::Continue);
        }

        let Some(query) = self
            .prompter
            .ask("Digite o nome (ou parte do nome) do paciente: ")?
        else {
            return Ok(Flow::Exit);
        };

        let outcome = self.registry.search(&query);
        let text = format_search(&outcome);
        if let SearchOutcome::Found(_) = outcome {
            self.prompter.say(&format!("\n{}", text))?;
        } else {
            self.prompter.say(&text)?;
        }
        Ok(Flow::Continue)
    }

    fn list_all(&mut self) -> io::Result<Flow> {
        self.section("Lista de Todos os Pacientes")?;
        let list = self.registry.list_all();
        self.prompter
            .say(&format_patient_list(list.as_ref(), self.display.rule_width))?;
        Ok(Flow::Continue)
    }

    #[cfg(test)]
    fn registry(&self) -> &PatientRegistry {
        &self.registry
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.prompter.into_output()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use vida_types::Patient;

    fn run(input: &str) -> (Vec<Patient>, String) {
        let mut session = Session::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            DisplayConfig::default(),
        );
        session.run().unwrap();
        let patients = session.registry().patients().to_vec();
        let output = String::from_utf8(session.into_output()).unwrap();
        (patients, output)
    }

    #[test]
    fn test_menu_choice_is_exact() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::Register));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse(" 1"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }

    #[test]
    fn test_register_with_retries() {
        let (patients, output) = run("1\nMaria\n-5\nabc\n30\n123\n(11) 99999-9999\n5\n");

        assert_eq!(patients, vec![Patient::new("Maria", 30, "(11) 99999-9999")]);
        assert!(output.contains("--- Cadastro de Paciente ---"));
        assert!(output.contains("Paciente cadastrado com sucesso!"));
        assert!(output.contains("Erro: O telefone parece curto."));
        assert!(output.trim_end().ends_with(FAREWELL));
    }

    #[test]
    fn test_empty_registry_queries() {
        let (patients, output) = run("2\n3\n4\n5\n");

        assert!(patients.is_empty());
        assert_eq!(output.matches(NO_PATIENTS).count(), 3);
        // search does not prompt for a name when there is nobody to find
        assert!(!output.contains("Digite o nome"));
    }

    #[test]
    fn test_invalid_choice_redisplays_menu() {
        let (_, output) = run("9\n5\n");

        assert!(output.contains(INVALID_CHOICE));
        assert_eq!(output.matches("=== SISTEMA CLÍNICA VIDA+ ===").count(), 2);
    }

    #[test]
    fn test_search_and_statistics_after_registrations() {
        let input = "1\nAna Silva\n20\n11999999999\n\
                     1\nMariana\n40\n11999999999\n\
                     1\nPedro\n40\n11999999999\n\
                     3\nana\n2\n5\n";
        let (patients, output) = run(input);

        assert_eq!(patients.len(), 3);
        assert!(output.contains("Pacientes encontrados (2):"));
        assert!(output.contains("  - Nome: Ana Silva, Idade: 20, Telefone: 11999999999"));
        assert!(output.contains("  - Nome: Mariana, Idade: 40, Telefone: 11999999999"));
        assert!(!output.contains("Nome: Pedro"));
        assert!(output.contains("Idade média dos pacientes: 33.3 anos"));
        assert!(output.contains("Paciente mais novo: Ana Silva (20 anos)"));
        assert!(output.contains("Paciente mais velho: Mariana (40 anos)"));
    }

    #[test]
    fn test_list_all_in_registration_order() {
        let input = "1\nBia\n33\n2199998888\n1\nAna\n22\n2199997777\n4\n5\n";
        let (_, output) = run(input);

        assert!(output.contains("Total de pacientes: 2"));
        let bia = output.find("Nome:     Bia").unwrap();
        let ana = output.find("Nome:     Ana").unwrap();
        assert!(bia < ana);
        assert!(output.contains(&"-".repeat(41)));
    }

    #[test]
    fn test_eof_ends_session() {
        let (patients, output) = run("1\nJoão\n25\n");

        assert!(patients.is_empty());
        assert!(output.trim_end().ends_with(FAREWELL));

        let (_, output) = run("");
        assert!(output.trim_end().ends_with(FAREWELL));
    }
}
