// src/seed.rs

use sqlx::SqlitePool;

use crate::{
    error::AppError,
    models::{
        question::CreateQuestionRequest,
        user::{CreateUserRequest, Role},
    },
    store::{questions, users},
};

/// What a seeding run inserted.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub users: usize,
    pub questions: usize,
}

/// Populates empty stores with demo accounts and the question catalog.
///
/// Each store is only touched when it holds no rows, so running this
/// again on a populated database inserts nothing.
pub async fn seed_demo_data(pool: &SqlitePool) -> Result<SeedReport, AppError> {
    let mut report = SeedReport::default();

    if users::count(pool).await? == 0 {
        for (username, password, full_name, email, role) in DEMO_USERS {
            let req = CreateUserRequest {
                username: username.to_string(),
                password: password.to_string(),
                full_name: Some(full_name.to_string()),
                email: Some(email.to_string()),
                role,
            };
            users::create(pool, &req).await?;
            report.users += 1;
        }
        tracing::info!("Seeded {} demo users", report.users);
    }

    if questions::count(pool).await? == 0 {
        for [question, a, b, c, d, answer] in DEMO_QUESTIONS {
            let req = CreateQuestionRequest {
                question: question.to_string(),
                option_a: a.to_string(),
                option_b: b.to_string(),
                option_c: c.to_string(),
                option_d: d.to_string(),
                correct_answer: answer.to_string(),
            };
            questions::create(pool, &req).await?;
            report.questions += 1;
        }
        tracing::info!("Seeded {} demo questions", report.questions);
    }

    Ok(report)
}

/// (username, password, full name, email, role)
const DEMO_USERS: [(&str, &str, &str, &str, Role); 3] = [
    ("admin", "admin123", "Administrator", "admin@smartquiz.com", Role::Admin),
    ("student1", "student123", "John Doe", "john@example.com", Role::Student),
    ("student2", "pass123", "Jane Smith", "jane@example.com", Role::Student),
];

/// [question, option A, option B, option C, option D, correct answer]
pub const DEMO_QUESTIONS: [[&str; 6]; 50] = [
    [
        "What is the capital of France?",
        "London",
        "Berlin",
        "Paris",
        "Madrid",
        "Paris",
    ],
    [
        "Which planet is known as the Red Planet?",
        "Venus",
        "Mars",
        "Jupiter",
        "Saturn",
        "Mars",
    ],
    [
        "What is 2 + 2?",
        "3",
        "4",
        "5",
        "6",
        "4",
    ],
    [
        "Who painted the Mona Lisa?",
        "Van Gogh",
        "Picasso",
        "Da Vinci",
        "Monet",
        "Da Vinci",
    ],
    [
        "What is the largest ocean on Earth?",
        "Atlantic",
        "Indian",
        "Arctic",
        "Pacific",
        "Pacific",
    ],
    [
        "In which year did World War II end?",
        "1944",
        "1945",
        "1946",
        "1947",
        "1945",
    ],
    [
        "What is the chemical symbol for gold?",
        "Go",
        "Gd",
        "Au",
        "Ag",
        "Au",
    ],
    [
        "Which country is home to Machu Picchu?",
        "Chile",
        "Peru",
        "Bolivia",
        "Ecuador",
        "Peru",
    ],
    [
        "What is the smallest country in the world?",
        "Monaco",
        "Vatican City",
        "Nauru",
        "San Marino",
        "Vatican City",
    ],
    [
        "Who wrote 'Romeo and Juliet'?",
        "Charles Dickens",
        "William Shakespeare",
        "Jane Austen",
        "Mark Twain",
        "William Shakespeare",
    ],
    [
        "What is the hardest natural substance on Earth?",
        "Gold",
        "Iron",
        "Diamond",
        "Platinum",
        "Diamond",
    ],
    [
        "Which gas makes up most of the Earth's atmosphere?",
        "Oxygen",
        "Carbon Dioxide",
        "Nitrogen",
        "Hydrogen",
        "Nitrogen",
    ],
    [
        "What is the currency of Japan?",
        "Yuan",
        "Won",
        "Yen",
        "Rupiah",
        "Yen",
    ],
    [
        "Which animal is known as the 'King of the Jungle'?",
        "Tiger",
        "Elephant",
        "Lion",
        "Leopard",
        "Lion",
    ],
    [
        "What is the fastest land animal?",
        "Lion",
        "Horse",
        "Cheetah",
        "Antelope",
        "Cheetah",
    ],
    [
        "In which continent is the Sahara Desert?",
        "Asia",
        "Africa",
        "Australia",
        "South America",
        "Africa",
    ],
    [
        "What is the main ingredient in guacamole?",
        "Tomato",
        "Avocado",
        "Onion",
        "Pepper",
        "Avocado",
    ],
    [
        "Which programming language is known for its use in web development?",
        "C++",
        "Java",
        "JavaScript",
        "Python",
        "JavaScript",
    ],
    [
        "What does 'WWW' stand for?",
        "World Wide Web",
        "World War Won",
        "We Will Win",
        "World Water Works",
        "World Wide Web",
    ],
    [
        "Which vitamin is produced when skin is exposed to sunlight?",
        "Vitamin A",
        "Vitamin B",
        "Vitamin C",
        "Vitamin D",
        "Vitamin D",
    ],
    [
        "What is the largest mammal in the world?",
        "Elephant",
        "Blue Whale",
        "Giraffe",
        "Hippopotamus",
        "Blue Whale",
    ],
    [
        "Which country gifted the Statue of Liberty to the USA?",
        "Britain",
        "Spain",
        "France",
        "Italy",
        "France",
    ],
    [
        "What is the boiling point of water in Celsius?",
        "90°C",
        "95°C",
        "100°C",
        "105°C",
        "100°C",
    ],
    [
        "Which sport is known as 'the beautiful game'?",
        "Basketball",
        "Tennis",
        "Football/Soccer",
        "Cricket",
        "Football/Soccer",
    ],
    [
        "What is the largest organ in the human body?",
        "Brain",
        "Liver",
        "Lungs",
        "Skin",
        "Skin",
    ],
    [
        "Which metal is liquid at room temperature?",
        "Lead",
        "Mercury",
        "Tin",
        "Zinc",
        "Mercury",
    ],
    [
        "What is the study of earthquakes called?",
        "Geology",
        "Seismology",
        "Meteorology",
        "Archaeology",
        "Seismology",
    ],
    [
        "Which river is the longest in the world?",
        "Amazon",
        "Nile",
        "Mississippi",
        "Yangtze",
        "Nile",
    ],
    [
        "What is the smallest unit of matter?",
        "Molecule",
        "Atom",
        "Electron",
        "Proton",
        "Atom",
    ],
    [
        "Which country has the most natural lakes?",
        "Russia",
        "Canada",
        "Finland",
        "Sweden",
        "Canada",
    ],
    [
        "What does 'HTTP' stand for?",
        "HyperText Transfer Protocol",
        "High Tech Transfer Protocol",
        "Home Tool Transfer Protocol",
        "Host Transfer Text Protocol",
        "HyperText Transfer Protocol",
    ],
    [
        "Which planet is closest to the Sun?",
        "Venus",
        "Mercury",
        "Earth",
        "Mars",
        "Mercury",
    ],
    [
        "What is the capital of Australia?",
        "Sydney",
        "Melbourne",
        "Canberra",
        "Perth",
        "Canberra",
    ],
    [
        "Which blood type is known as the universal donor?",
        "A+",
        "B+",
        "AB+",
        "O-",
        "O-",
    ],
    [
        "What is the most spoken language in the world?",
        "English",
        "Spanish",
        "Mandarin Chinese",
        "Hindi",
        "Mandarin Chinese",
    ],
    [
        "Which instrument measures atmospheric pressure?",
        "Thermometer",
        "Barometer",
        "Hygrometer",
        "Anemometer",
        "Barometer",
    ],
    [
        "What is the largest bird in the world?",
        "Eagle",
        "Ostrich",
        "Albatross",
        "Condor",
        "Ostrich",
    ],
    [
        "Which acid is found in vinegar?",
        "Citric acid",
        "Acetic acid",
        "Sulfuric acid",
        "Nitric acid",
        "Acetic acid",
    ],
    [
        "What is the most abundant gas in the universe?",
        "Oxygen",
        "Carbon Dioxide",
        "Helium",
        "Hydrogen",
        "Hydrogen",
    ],
    [
        "Which country is known as the Land of the Rising Sun?",
        "China",
        "South Korea",
        "Japan",
        "Thailand",
        "Japan",
    ],
    [
        "What is the speed of light in vacuum?",
        "300,000 km/s",
        "150,000 km/s",
        "500,000 km/s",
        "1,000,000 km/s",
        "300,000 km/s",
    ],
    [
        "Which organ produces insulin?",
        "Liver",
        "Kidney",
        "Pancreas",
        "Stomach",
        "Pancreas",
    ],
    [
        "What is the capital of Canada?",
        "Toronto",
        "Vancouver",
        "Montreal",
        "Ottawa",
        "Ottawa",
    ],
    [
        "Which element has the atomic number 1?",
        "Helium",
        "Hydrogen",
        "Lithium",
        "Carbon",
        "Hydrogen",
    ],
    [
        "What is the largest desert in the world?",
        "Sahara",
        "Gobi",
        "Antarctica",
        "Arabian",
        "Antarctica",
    ],
    [
        "Which scientist developed the theory of relativity?",
        "Newton",
        "Darwin",
        "Einstein",
        "Tesla",
        "Einstein",
    ],
    [
        "What is the main component of the Sun?",
        "Oxygen",
        "Carbon",
        "Hydrogen",
        "Helium",
        "Hydrogen",
    ],
    [
        "Which country hosted the 2016 Summer Olympics?",
        "China",
        "Brazil",
        "Russia",
        "Japan",
        "Brazil",
    ],
    [
        "What is the chemical formula for water?",
        "H2O",
        "CO2",
        "NaCl",
        "CH4",
        "H2O",
    ],
    [
        "Which mountain range contains Mount Everest?",
        "Andes",
        "Himalayas",
        "Rocky Mountains",
        "Alps",
        "Himalayas",
    ],
];
