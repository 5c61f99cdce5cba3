use base64::{engine::general_purpose, Engine as _};
use mindfulbite::state::{MotionAction, MotionHub, PersonaAction, PersonaEngine, ShellWorkshop, WorkshopAction};
use mindfulbite::{
    seed, GeminiClient, GeminiConfig, ImageClient, ImageRef, PersonaMode, ShellDesign, ShellStyle,
    TextClient,
};
use std::env;
use std::fs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    match dotenv::dotenv() {
        Ok(_) => log::info!("✅ .env file loaded successfully"),
        Err(_) => log::warn!("⚠️  No .env file found, using system environment variables"),
    }

    mindfulbite::logger::init_with_config(
        mindfulbite::logger::LoggerConfig::development()
            .with_level(mindfulbite::logger::LogLevel::Debug),
    )?;

    log::info!("🔍 Checking Gemini environment...");

    match env::var("GEMINI_API_KEY") {
        Ok(key) => {
            log::info!("✅ Gemini API key found in environment");
            log::debug!("API key starts with: {}...", &key[..6.min(key.len())]);
        }
        Err(_) => {
            log::error!("❌ GEMINI_API_KEY is not set, client construction will fail");
        }
    }

    log::info!("🔄 Creating Gemini client...");
    let client = match GeminiClient::new(GeminiConfig::from_env()) {
        Ok(client) => {
            log::info!("✅ Gemini client initialized successfully");
            client
        }
        Err(e) => {
            log::error!("❌ Failed to initialize Gemini client: {}", e);
            return Err(e.into());
        }
    };

    log::info!("📚 Available text generation models:");
    for (id, name, provider) in TextClient::supported_models() {
        log::info!("  {} - {} ({})", id, name, provider);
    }

    log::info!("🖼️  Available image generation models:");
    for (id, name, provider) in ImageClient::supported_models() {
        log::info!("  {} - {} ({})", id, name, provider);
    }

    // Fleet overview from the seeded mock store
    let summary = seed::fleet_summary();
    log::info!(
        "🏠 Fleet: {} snacks avoided, {:.1}h active, top user {}",
        summary.snacks_avoided,
        summary.active_hours,
        summary.top_user
    );
    for device in seed::devices() {
        log::info!(
            "  {} ({}) - {:?}, battery {}%{}",
            device.name,
            device.owner,
            device.status,
            device.battery_level,
            if device.battery_low() { " ⚠️" } else { "" }
        );
    }

    log::info!("📊 Weekly analytics:");
    for sample in seed::weekly_health() {
        log::info!(
            "  {}: {} kcal, {} snacks, {} motion min",
            sample.day,
            sample.calories,
            sample.snacks,
            sample.motion_minutes
        );
    }
    for row in seed::device_comparison() {
        log::info!("  {}: intake {} / burned {}", row.label, row.intake, row.burned);
    }

    // Motion hub round trip
    let mut hub = MotionHub::new(seed::motion_games());
    log::info!("🎮 Motion games ({} active):", hub.active_count());
    hub.apply(MotionAction::ToggleGame("g2".to_string()));
    for game in &hub.games {
        log::info!(
            "  {} [{}] - {}",
            game.title,
            if game.is_active { "on" } else { "off" },
            game.description
        );
    }

    // Test 1: persona simulation across all three modes
    log::info!("🎭 Testing persona simulation...");

    let mut engine = PersonaEngine::new(seed::knowledge_documents());
    let context = engine.rag_context();
    log::debug!("RAG context: {}", context);

    for persona in PersonaMode::ALL {
        log::info!("🧪 Simulating persona: {} ({})", persona, persona.tagline());

        match client
            .simulate_persona_response(persona, &engine.sim_action, &context)
            .await
        {
            Ok(reply) => {
                log::info!("✅ Simulation successful!");
                log::info!("📝 Reply: {}", reply);
                engine.apply(PersonaAction::RecordResponse(reply));
            }
            Err(e) => {
                log::error!("❌ Simulation failed with {}: {}", persona, e);
            }
        }

        log::info!("---");
    }

    // Test 2: shell concept generation through the workshop store
    log::info!("🎨 Testing shell concept generation...");
    log::info!(
        "  Preset styles: {}",
        ShellStyle::ALL.map(|s| s.label()).join(", ")
    );

    let mut workshop = ShellWorkshop::new();
    workshop.apply(WorkshopAction::SetPrompt("A lucky cat wearing sunglasses".to_string()));
    workshop.apply(WorkshopAction::SelectStyle(ShellStyle::AnimeChibi));

    if workshop.can_generate() {
        match client
            .generate_shell_concept(&workshop.prompt, workshop.style.label())
            .await
        {
            Ok(image) => {
                match &image {
                    ImageRef::Inline { mime_type, data } => {
                        log::info!("✅ Shell concept generated ({}, {} chars)", mime_type, data.len());

                        let filename =
                            format!("shell_concept_{}.png", chrono::Utc::now().timestamp());
                        match general_purpose::STANDARD.decode(data) {
                            Ok(image_bytes) => match fs::write(&filename, image_bytes) {
                                Ok(_) => log::info!("💾 Concept saved to: {}", filename),
                                Err(e) => log::error!("❌ Failed to save concept: {}", e),
                            },
                            Err(e) => log::error!("❌ Failed to decode base64 image: {}", e),
                        }
                    }
                    ImageRef::Placeholder => {
                        log::warn!(
                            "⚠️  No image in response, placeholder substituted: {}",
                            image.to_uri()
                        );
                    }
                }

                let design = ShellDesign::new(
                    workshop.prompt.clone(),
                    workshop.style.label(),
                    image,
                );
                workshop.apply(WorkshopAction::RecordDesign(design));
                log::info!("🗂️  Workshop now holds {} design(s)", workshop.designs.len());
            }
            Err(e) => {
                log::error!("❌ Shell generation failed: {}", e);
                log::warn!("💡 Check the API key and model availability for your account");
            }
        }
    }

    log::info!("🎉 All tests completed!");

    Ok(())
}
