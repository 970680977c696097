use palbreed::{
    GameConfig, Gender, LocationType, Pal, PalDb, PalId, PalInstance, PalLocation, Trait,
    TraitSet,
};
use palbreed_solver::{BreedingSolver, PalReference, PalSpecifier, SolverConfig, SolverLogger};

use std::time::Duration;

// A miniature stand-in for the real game catalog.
fn catalog() -> PalDb {
    let lamball = PalId::base(1);
    let cattiva = PalId::base(2);
    let chikipi = PalId::base(3);
    let fuack = PalId::base(6);
    let foxparks = PalId::base(7);
    let rooby = PalId::base(34);

    PalDb::new(
        vec![
            Pal::new(lamball, "Lamball"),
            Pal::new(cattiva, "Cattiva"),
            Pal::new(chikipi, "Chikipi"),
            Pal::new(fuack, "Fuack"),
            Pal::new(foxparks, "Foxparks"),
            Pal::new(rooby, "Rooby"),
        ],
        [
            (lamball, cattiva, chikipi),
            (chikipi, fuack, foxparks),
            (foxparks, lamball, rooby),
        ],
    )
}

fn owned_box() -> Vec<PalInstance> {
    let at = |kind, index| PalLocation { kind, index };
    let with = |names: &[&str]| TraitSet::of(names.iter().map(|n| Trait::new(*n)));

    vec![
        PalInstance {
            pal: PalId::base(1),
            gender: Gender::Male,
            traits: with(&["Swift"]),
            location: at(LocationType::Party, 0),
        },
        PalInstance {
            pal: PalId::base(2),
            gender: Gender::Female,
            traits: with(&["Runner"]),
            location: at(LocationType::Party, 1),
        },
        PalInstance {
            pal: PalId::base(2),
            gender: Gender::Female,
            traits: with(&["Runner", "Clumsy"]),
            location: at(LocationType::Palbox, 17),
        },
        PalInstance {
            pal: PalId::base(6),
            gender: Gender::Male,
            traits: with(&[]),
            location: at(LocationType::Base, 2),
        },
    ]
}

fn main() {
    let config = GameConfig::standard();
    let db = catalog();
    let solver = BreedingSolver::new(
        &config,
        &db,
        owned_box(),
        SolverConfig {
            max_breeding_steps: 4,
            max_wild_pals: 2,
            max_irrelevant_traits: 1,
            max_effort: Duration::from_secs(3 * 24 * 3600),
        },
    );

    let spec = PalSpecifier {
        pal: PalId::base(34),
        traits: TraitSet::of([Trait::new("Runner"), Trait::new("Swift")]),
    };

    let mut logger = SolverLogger::new();
    let solutions = match solver.solve_with(&spec, &mut logger) {
        Ok(solutions) => solutions,
        Err(e) => {
            eprintln!("{}", e);
            return;
        }
    };

    for snapshot in logger.iter() {
        println!("{}", snapshot);
    }

    let target_name = db.pal(spec.pal).map(|p| p.name.as_str()).unwrap_or("?");
    println!(
        "\n{} plan(s) for {} with {}",
        solutions.len(),
        target_name,
        spec.traits
    );

    if let Some(best) = solutions.first() {
        println!("\nbest plan, {} min expected:", best.effort().as_secs() / 60);
        print_plan(&db, best, 0);

        let rounds: Vec<_> = logger.iter().collect();
        match ron::to_string(&rounds) {
            Ok(log) => println!("\nround log: {}", log),
            Err(e) => eprintln!("{}", e),
        }
    }
}

fn print_plan(db: &PalDb, reference: &PalReference, depth: usize) {
    let indent = "  ".repeat(depth);
    let name = db
        .pal(reference.pal())
        .map(|p| p.name.as_str())
        .unwrap_or("?");
    match reference {
        PalReference::Owned(o) => {
            println!(
                "{}use owned {} {} {} from {}",
                indent,
                o.instance().gender,
                name,
                o.instance().traits,
                o.instance().location,
            );
        }
        PalReference::Wild(_) => {
            println!(
                "{}catch wild {} {}, {} min",
                indent,
                name,
                reference.traits(),
                reference.effort().as_secs() / 60,
            );
        }
        PalReference::Bred(b) => {
            println!(
                "{}breed {} {} {}, p={:.3} per attempt, {} min total",
                indent,
                reference.gender(),
                name,
                reference.traits(),
                b.probability(),
                reference.effort().as_secs() / 60,
            );
            let (parent1, parent2) = b.parents();
            print_plan(db, parent1, depth + 1);
            print_plan(db, parent2, depth + 1);
        }
    }
}
