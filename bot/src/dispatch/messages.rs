//! Fixed reply texts.

/// Reply to `/start` (Markdown).
pub const WELCOME: &str = "🎬 *Welcome to Movie Search Bot!*\n\n\
I can help you search for movies and get detailed information including posters.\n\n\
*Available Commands:*\n\
• `/search <movie_title>` - Search for movies\n\
• `/details <imdb_id>` - Get detailed movie information\n\
• `/help` - Show this help message\n\n\
*Examples:*\n\
• `/search The Dark Knight`\n\
• `/details tt0468569`\n\n\
Just type a movie name to search quickly! 🍿";

/// Reply to `/help` (Markdown).
pub const HELP: &str = "🎬 *Movie Search Bot Help*\n\n\
*Commands:*\n\
• `/start` - Start the bot and see welcome message\n\
• `/search <movie_title>` - Search for movies by title\n\
• `/details <imdb_id>` - Get detailed information about a movie\n\
• `/help` - Show this help message\n\n\
*Quick Search:*\n\
You can also just type a movie name without any command to search!\n\n\
*Examples:*\n\
• `Inception`\n\
• `/search Avatar`\n\
• `/details tt1375666`\n\n\
*Tips:*\n\
• Use specific movie titles for better results\n\
• Copy the IMDb ID from search results to get full details\n\
• Movie posters will be shown when available\n\n\
Happy movie searching! 🍿";

/// `/search` without a query (Markdown).
pub const SEARCH_USAGE: &str =
    "❌ Please provide a movie title to search.\nExample: `/search The Dark Knight`";

/// `/details` without an id (Markdown).
pub const DETAILS_USAGE: &str =
    "❌ Please provide an IMDb ID to get movie details.\nExample: `/details tt0468569`";

/// Free text shorter than the minimum query length (plain).
pub const QUERY_TOO_SHORT: &str =
    "🔍 Please provide a longer movie title for better search results.";

/// Generic failure of the search sequence (plain).
pub const SEARCH_FAILED: &str =
    "❌ Sorry, there was an error processing your search. Please try again later.";

/// Generic failure of the details sequence (plain).
pub const DETAILS_FAILED: &str =
    "❌ Sorry, there was an error getting movie details. Please try again later.";
