use clap::{Parser, Subcommand};
use courseware::model::entity::{
    Course, CourseCreate, CourseModule, CourseModuleCreate, Essay, EssayCreate, Lesson,
    LessonCreate, Quiz, QuizCreate, QuizOption, QuizOptionCreate, QuizSet, QuizSetCreate,
    UserEntity, UserEntityCreateUpdate,
};
use courseware::model::{CrudRepository, DatabaseError, DbConnection, ModelManager};
use courseware::web::AuthenticatedUser;

#[derive(Parser, Debug)]
#[command(about = "CLI tool for filling the courseware DB", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage users
    User {
        #[command(subcommand)]
        action: UserCommands,
    },

    /// Manage courses
    Course {
        #[command(subcommand)]
        action: CourseCommands,
    },

    /// Manage modules
    Module {
        #[command(subcommand)]
        action: ModuleCommands,
    },

    /// Manage lessons
    Lesson {
        #[command(subcommand)]
        action: LessonCommands,
    },

    /// Manage quiz sets
    Quiz {
        #[command(subcommand)]
        action: QuizCommands,
    },

    /// Manage essays
    Essay {
        #[command(subcommand)]
        action: EssayCommands,
    },
}

/// User management
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    Add {
        #[arg(long)]
        username: String,
        #[arg(long)]
        password: String,
        #[arg(long, default_value = "user")]
        role: String,
    },
}

/// Course management
#[derive(Subcommand, Debug)]
pub enum CourseCommands {
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
    },
}

/// Module management
#[derive(Subcommand, Debug)]
pub enum ModuleCommands {
    Add {
        /// Course title to attach the module to
        #[arg(long)]
        course_title: String,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: String,
        #[arg(long, default_value_t = 0)]
        order_index: i32,
    },
}

/// Lesson management
#[derive(Subcommand, Debug)]
pub enum LessonCommands {
    Add {
        /// Module title to attach the lesson to
        #[arg(long)]
        module_title: String,
        #[arg(long)]
        title: String,
        /// Path to a Markdown file with lesson content
        #[arg(long)]
        file: String,
        #[arg(long, default_value_t = 0)]
        order_index: i32,
    },
}

/// Quiz set / question / option management
#[derive(Subcommand, Debug)]
pub enum QuizCommands {
    AddSet {
        /// Course title to attach the quiz set to
        #[arg(long)]
        course_title: String,
        #[arg(long)]
        title: String,
    },
    AddQuestion {
        /// Quiz set title to attach the question to
        #[arg(long)]
        set_title: String,
        #[arg(long)]
        question: String,
        #[arg(long, default_value_t = 0)]
        order_index: i32,
    },
    AddOption {
        /// Question text to attach the option to
        #[arg(long)]
        question: String,
        #[arg(long)]
        label: String,
        #[arg(long)]
        option_text: String,
        #[arg(long, default_value_t = false)]
        is_correct: bool,
    },
}

/// Essay management
#[derive(Subcommand, Debug)]
pub enum EssayCommands {
    Add {
        /// Course title to attach the essay to
        #[arg(long)]
        course_title: String,
        #[arg(long)]
        title: String,
        /// Path to a file with the essay prompt
        #[arg(long)]
        file: String,
    },
}

async fn lookup_id(mm: &ModelManager, query: &str, key: &str) -> Result<uuid::Uuid, DatabaseError> {
    sqlx::query_scalar(query)
        .bind(key)
        .fetch_one(mm.executor())
        .await
        .map_err(DatabaseError::SqlxError)
}

#[tokio::main]
async fn main() -> courseware::error::AppResult<()> {
    let _ = dotenvy::dotenv();
    let args = Cli::parse();

    let db_con = DbConnection::connect(&std::env::var("DATABASE_URL").unwrap())?;
    let mm = ModelManager::new(db_con);
    let actor = AuthenticatedUser::admin();

    match args.command {
        Commands::User { action } => match action {
            UserCommands::Add {
                username, password, ..
            } => {
                let user = UserEntity::create(
                    &mm,
                    &actor,
                    UserEntityCreateUpdate {
                        username,
                        password_hash: courseware::auth::hash_password(&password).unwrap(),
                    },
                )
                .await?;
                println!("User created: {:?}", user);
            }
        },

        Commands::Course { action } => match action {
            CourseCommands::Add { title, description } => {
                let course =
                    Course::create(&mm, &actor, CourseCreate::new(title, description, None))
                        .await?;
                println!("Course created: {:?}", course);
            }
        },

        Commands::Module { action } => match action {
            ModuleCommands::Add {
                course_title,
                title,
                description,
                order_index,
            } => {
                let course_id =
                    lookup_id(&mm, "SELECT id FROM courses WHERE title = $1", &course_title)
                        .await?;

                let module = CourseModule::create(
                    &mm,
                    &actor,
                    CourseModuleCreate::new(
                        course_id,
                        title,
                        description,
                        Some(order_index),
                        None,
                    ),
                )
                .await?;
                println!("Module created: {:?}", module);
            }
        },

        Commands::Lesson { action } => match action {
            LessonCommands::Add {
                module_title,
                title,
                file,
                order_index,
            } => {
                let module_id =
                    lookup_id(&mm, "SELECT id FROM modules WHERE title = $1", &module_title)
                        .await?;

                let content = std::fs::read_to_string(file)?;
                let lesson = Lesson::create(
                    &mm,
                    &actor,
                    LessonCreate::new(module_id, title, content, Some(order_index), None),
                )
                .await?;
                println!("Lesson created: {:?}", lesson);
            }
        },

        Commands::Quiz { action } => match action {
            QuizCommands::AddSet {
                course_title,
                title,
            } => {
                let course_id =
                    lookup_id(&mm, "SELECT id FROM courses WHERE title = $1", &course_title)
                        .await?;

                let set =
                    QuizSet::create(&mm, &actor, QuizSetCreate::new(course_id, title, None))
                        .await?;
                println!("Quiz set created: {:?}", set);
            }

            QuizCommands::AddQuestion {
                set_title,
                question,
                order_index,
            } => {
                let set_id =
                    lookup_id(&mm, "SELECT id FROM quiz_sets WHERE title = $1", &set_title)
                        .await?;

                let quiz = Quiz::create(
                    &mm,
                    &actor,
                    QuizCreate::new(set_id, question, Some(order_index)),
                )
                .await?;
                println!("Quiz created: {:?}", quiz);
            }

            QuizCommands::AddOption {
                question,
                label,
                option_text,
                is_correct,
            } => {
                let quiz_id =
                    lookup_id(&mm, "SELECT id FROM quizzes WHERE question = $1", &question)
                        .await?;

                let option = QuizOption::create(
                    &mm,
                    &actor,
                    QuizOptionCreate {
                        quiz_id,
                        label,
                        option_text,
                        is_correct: Some(is_correct),
                    },
                )
                .await?;
                println!("Option created: {:?}", option);
            }
        },

        Commands::Essay { action } => match action {
            EssayCommands::Add {
                course_title,
                title,
                file,
            } => {
                let course_id =
                    lookup_id(&mm, "SELECT id FROM courses WHERE title = $1", &course_title)
                        .await?;

                let prompt = std::fs::read_to_string(file)?;
                let essay =
                    Essay::create(&mm, &actor, EssayCreate::new(course_id, title, prompt)).await?;
                println!("Essay created: {:?}", essay);
            }
        },
    }

    Ok(())
}
