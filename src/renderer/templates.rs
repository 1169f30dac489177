//! Starter file templates rendered with MiniJinja.

/// Main application component, showing a centered welcome message.
pub const APP_COMPONENT: &str = r#"function App() {
  return (
    <div className="flex justify-center items-center h-screen bg-white text-3xl font-bold text-purple-600">
      Welcome to {{ project_name }} ❤️
    </div>
  );
}
export default App;
"#;

/// Build-tool config registering the React and Tailwind plugins.
pub const VITE_CONFIG_TAILWIND: &str = r#"import { defineConfig } from 'vite'
import react from '@vitejs/plugin-react'
import tailwindcss from '@tailwindcss/vite'

export default defineConfig({
  plugins: [react(), tailwindcss()],
})
"#;

/// Main stylesheet when Tailwind is chosen: exactly one import directive.
pub const TAILWIND_STYLESHEET: &str = "@import \"tailwindcss\";\n";

pub const ENV_FILE: &str = "PORT={{ port }}\n";

/// Backend entry point: a minimal HTTP server with a root health check.
pub const SERVER_ENTRY: &str = r#"import express from "express";
import dotenv from "dotenv";

dotenv.config();

const app = express();
const PORT = process.env.PORT || {{ port }};

app.use(express.json());

app.get("/", (req, res) => {
  res.send("API is running...");
});

app.listen(PORT, () => {
  console.log(`Server running on port ${PORT}`);
});
"#;
